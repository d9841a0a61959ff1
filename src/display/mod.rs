//! Display formatting for terminal output
//!
//! Provides utilities for formatting the server's data for terminal
//! display: the account tree, section listings, and check results.

pub mod accounts;

pub use accounts::{format_account_tree, format_player_rank, format_section_list};
