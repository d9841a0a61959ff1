//! Terminal User Interface module
//!
//! The interactive client for the tracker server, built on ratatui. The
//! left panel is the account tree (sections with their accounts); the
//! right column holds the account form and the rank and credentials
//! result panels. All data comes from the server and is re-fetched
//! wholesale after every mutation and on a timer.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
