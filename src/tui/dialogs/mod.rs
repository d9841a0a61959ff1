//! Dialog modules for the TUI
//!
//! Contains the modal dialogs: section-delete confirmation, new-section
//! entry, and blocking alerts.

pub mod alert;
pub mod confirm;
pub mod section;
