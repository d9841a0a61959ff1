//! Core data models for ranktrack
//!
//! This module contains the data structures that represent the tracking
//! domain: saved accounts, the sections that group them, and rank data.

pub mod account;
pub mod rank;
pub mod section;

pub use account::{Account, AccountKey};
pub use rank::{PlayerRank, RankData};
pub use section::{Section, DEFAULT_SECTION};
