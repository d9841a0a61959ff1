//! TUI Views module
//!
//! Contains the account tree, the account form, the rank and credentials
//! result panels, and the status bar.

pub mod credentials;
pub mod form;
pub mod rank_panel;
pub mod status_bar;
pub mod tree;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    tree::render(frame, app, layout.tree);
    form::render(frame, app, layout.form);
    rank_panel::render(frame, app, layout.rank);
    credentials::render(frame, app, layout.credentials);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog.clone() {
        ActiveDialog::ConfirmDeleteSection(name) => {
            let message = format!(
                "Are you sure you want to delete the \"{}\" section? Accounts will be moved to Default.",
                name
            );
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::NewSection => {
            dialogs::section::render(frame, app);
        }
        ActiveDialog::Alert(message) => {
            dialogs::alert::render(frame, &message);
        }
        ActiveDialog::None => {}
    }
}
