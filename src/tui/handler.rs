//! Event handler for the TUI
//!
//! Routes keyboard events to the tree or the form depending on focus,
//! with dialogs taking priority, and carries the mutations out against
//! the tracker server. Every successful mutation is followed by a full
//! view-model reload.

use crossterm::event::{KeyCode, KeyEvent};

use crate::error::TrackerResult;
use crate::models::{Account, AccountKey, DEFAULT_SECTION};

use super::app::{ActiveDialog, App, FocusedPanel, FormField, TreeRow};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> TrackerResult<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> TrackerResult<()> {
    // Dialogs swallow every key while open
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.focused_panel {
        FocusedPanel::Tree => handle_tree_key(app, key),
        FocusedPanel::Form => handle_form_key(app, key),
    }
}

/// Handle keys while the account tree is focused
fn handle_tree_key(app: &mut App, key: KeyEvent) -> TrackerResult<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Move focus to the form
        KeyCode::Tab => app.focused_panel = FocusedPanel::Form,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Toggle a section or load the account under the cursor
        KeyCode::Enter | KeyCode::Char(' ') => activate_row(app),

        // Actions on the current form contents
        KeyCode::Char('s') => save_account(app),
        KeyCode::Char('c') => check_rank(app),

        KeyCode::Char('n') => app.open_dialog(ActiveDialog::NewSection),
        KeyCode::Char('d') => delete_selected(app),
        KeyCode::Char('r') => app.reload(),

        _ => {}
    }

    Ok(())
}

/// Handle keys while the account form is focused
fn handle_form_key(app: &mut App, key: KeyEvent) -> TrackerResult<()> {
    let section_count = app.view_model.sections.len();

    match key.code {
        // Back to the tree
        KeyCode::Esc => app.focused_panel = FocusedPanel::Tree,

        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),

        // Enter advances through the fields and saves from the last one
        KeyCode::Enter => {
            if app.form.focused_field == FormField::Section {
                save_account(app);
            } else {
                app.form.focus_next();
            }
        }

        // Left/Right edit the current input, or cycle the section selector
        KeyCode::Left => match app.form.current_input_mut() {
            Some(input) => input.move_left(),
            None => app.form.cycle_section(section_count, false),
        },
        KeyCode::Right => match app.form.current_input_mut() {
            Some(input) => input.move_right(),
            None => app.form.cycle_section(section_count, true),
        },

        KeyCode::Home => {
            if let Some(input) = app.form.current_input_mut() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = app.form.current_input_mut() {
                input.move_end();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.form.current_input_mut() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = app.form.current_input_mut() {
                input.delete();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.form.current_input_mut() {
                input.insert(c);
            }
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> TrackerResult<()> {
    match &app.active_dialog {
        ActiveDialog::ConfirmDeleteSection(name) => {
            let name = name.clone();
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.close_dialog();
                    delete_section(app, &name);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::NewSection => {
            dialogs::section::handle_key(app, key);
        }
        ActiveDialog::Alert(_) => {
            dialogs::alert::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }

    Ok(())
}

/// Toggle a section header or load the selected account into the form
fn activate_row(app: &mut App) {
    match app.visible_rows().get(app.selected_row).cloned() {
        Some(TreeRow::Section { name, .. }) => app.toggle_section(&name),
        Some(TreeRow::Account { .. }) => app.select_account_row(),
        None => {}
    }
}

/// Region from the form, falling back to the configured default
fn form_region(app: &App) -> String {
    let region = app.form.region.value().trim();
    if region.is_empty() {
        app.default_region.clone()
    } else {
        region.to_string()
    }
}

/// Build an account from the form and save it through the server
///
/// Without an in-game name and hashtag nothing is sent at all; the server
/// would reject it anyway, but the prompt is friendlier than the 400.
fn save_account(app: &mut App) {
    let username = app.form.username.value().trim().to_string();
    let hashtag = app.form.hashtag.value().trim().to_string();

    if username.is_empty() || hashtag.is_empty() {
        app.alert("Please enter an In-game Name and Hashtag before saving.");
        return;
    }

    let mut account = Account::new(username, hashtag, form_region(app));
    account.account_username = app.form.login.value().to_string();
    account.password = app.form.password.value().to_string();
    account.section = app
        .form
        .selected_section_name(&app.view_model.sections)
        .unwrap_or_default();

    match app.client.save_account(&account) {
        Ok(()) => {
            app.reload();
            app.set_status(format!("Saved {}", account.label()));
        }
        Err(err) => app.alert(format!("Failed to save account: {}", err.user_message())),
    }
}

/// Look up the rank for whatever is in the form
fn check_rank(app: &mut App) {
    let username = app.form.username.value().trim().to_string();
    let hashtag = app.form.hashtag.value().trim().to_string();

    if username.is_empty() || hashtag.is_empty() {
        app.alert("Please enter an In-game Name and Hashtag.");
        return;
    }

    let region = form_region(app);
    let result = app.client.check_rank(&username, &hashtag, &region);
    app.apply_check_result(result);
}

/// Delete whatever the cursor is on
///
/// Accounts are deleted immediately; sections ask for confirmation first,
/// and the Default section is refused outright.
fn delete_selected(app: &mut App) {
    match app.visible_rows().get(app.selected_row).cloned() {
        Some(TreeRow::Account { section, index }) => {
            let Some(key) = app.account_at(&section, index).map(Account::key) else {
                return;
            };
            delete_account(app, &key);
        }
        Some(TreeRow::Section { name, .. }) => {
            if name == DEFAULT_SECTION {
                app.set_status("Cannot delete the Default section.");
            } else {
                app.open_dialog(ActiveDialog::ConfirmDeleteSection(name));
            }
        }
        None => {}
    }
}

/// Delete an account and drop its result panels
fn delete_account(app: &mut App, key: &AccountKey) {
    match app.client.delete_account(key) {
        Ok(()) => {
            app.hide_result_panels();
            app.reload();
            app.set_status(format!("Deleted {}", key));
        }
        Err(_) => app.alert("Failed to delete account."),
    }
}

/// Delete a section after the user confirmed
fn delete_section(app: &mut App, name: &str) {
    match app.client.delete_section(name) {
        Ok(()) => {
            app.reload();
            app.set_status(format!("Section '{}' deleted", name));
        }
        Err(err) => app.alert(format!("Failed to delete section: {}", err.user_message())),
    }
}
