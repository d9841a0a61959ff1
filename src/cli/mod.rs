//! CLI command handlers
//!
//! This module contains the implementation of the one-shot CLI commands,
//! bridging the clap argument parsing with the server client.

pub mod account;
pub mod check;
pub mod section;

pub use account::{handle_account_command, AccountCommands};
pub use check::handle_check_command;
pub use section::{handle_section_command, SectionCommands};
