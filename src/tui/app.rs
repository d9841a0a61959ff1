//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering and handling
//! events: the server client, the last fetched view-model, tree and form
//! state, the result panels and any active dialog. The server stays the
//! source of truth; after every mutation the whole view-model is fetched
//! again and the tree is rebuilt from scratch.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use chrono::Local;

use crate::client::{ApiClient, ViewModel};
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::{Account, PlayerRank, Section, DEFAULT_SECTION};

use super::dialogs::section::SectionFormState;
use super::widgets::input::TextInput;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Tree,
    Form,
}

/// Fields of the account form, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Username,
    Hashtag,
    Region,
    Login,
    Password,
    Section,
}

impl FormField {
    /// The next field, wrapping past the section selector
    pub fn next(self) -> Self {
        match self {
            Self::Username => Self::Hashtag,
            Self::Hashtag => Self::Region,
            Self::Region => Self::Login,
            Self::Login => Self::Password,
            Self::Password => Self::Section,
            Self::Section => Self::Username,
        }
    }

    /// The previous field, wrapping to the section selector
    pub fn prev(self) -> Self {
        match self {
            Self::Username => Self::Section,
            Self::Hashtag => Self::Username,
            Self::Region => Self::Hashtag,
            Self::Login => Self::Region,
            Self::Password => Self::Login,
            Self::Section => Self::Password,
        }
    }
}

/// State of the account entry form
#[derive(Debug, Clone)]
pub struct AccountForm {
    /// In-game name input
    pub username: TextInput,
    /// Riot id tag input
    pub hashtag: TextInput,
    /// Region input
    pub region: TextInput,
    /// Login username input
    pub login: TextInput,
    /// Login password input
    pub password: TextInput,
    /// Index into the sections list for the section selector
    pub section_index: usize,
    /// Field that currently receives typed characters
    pub focused_field: FormField,
}

impl AccountForm {
    /// Create an empty form, region pre-filled with the configured default
    pub fn new(default_region: &str) -> Self {
        Self {
            username: TextInput::new()
                .label("In-game Name")
                .placeholder("e.g. Shroud"),
            hashtag: TextInput::new().label("Hashtag").placeholder("e.g. 1234"),
            region: TextInput::new().label("Region").content(default_region),
            login: TextInput::new().label("Login"),
            password: TextInput::new().label("Password"),
            section_index: 0,
            focused_field: FormField::default(),
        }
    }

    /// Fill the form from a saved account
    pub fn load_account(&mut self, account: &Account, sections: &[Section]) {
        self.username.set_content(account.username.clone());
        self.hashtag.set_content(account.hashtag.clone());
        self.region.set_content(account.region.clone());
        self.login.set_content(account.account_username.clone());
        self.password.set_content(account.password.clone());
        self.section_index = sections
            .iter()
            .position(|s| s.name == account.section)
            .unwrap_or(0);
    }

    /// The text input for the focused field, if it is one
    pub fn current_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Username => Some(&mut self.username),
            FormField::Hashtag => Some(&mut self.hashtag),
            FormField::Region => Some(&mut self.region),
            FormField::Login => Some(&mut self.login),
            FormField::Password => Some(&mut self.password),
            FormField::Section => None,
        }
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Step the section selector forward or backward, wrapping around
    pub fn cycle_section(&mut self, section_count: usize, forward: bool) {
        if section_count == 0 {
            self.section_index = 0;
            return;
        }
        self.section_index = if forward {
            (self.section_index + 1) % section_count
        } else {
            (self.section_index + section_count - 1) % section_count
        };
    }

    /// Name of the section the selector points at
    pub fn selected_section_name(&self, sections: &[Section]) -> Option<String> {
        sections.get(self.section_index).map(|s| s.name.clone())
    }
}

/// One row of the flattened account tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    /// Section header
    Section {
        name: String,
        expanded: bool,
        deletable: bool,
        count: usize,
    },
    /// Account row, addressed by section name and position within it
    Account { section: String, index: usize },
}

/// State of the rank result panel
///
/// Hidden means the panel is not drawn at all; a selected account with no
/// stored rank keeps it hidden rather than showing empty fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RankPanel {
    #[default]
    Hidden,
    /// Rank data from a lookup or a selected account
    Result(PlayerRank),
    /// Error message shown in place of results
    Error(String),
}

/// State of the saved-credentials panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CredentialsPanel {
    #[default]
    Hidden,
    /// At least one credential is saved; absent ones render "Not saved"
    Shown {
        username: Option<String>,
        password: Option<String>,
    },
}

impl CredentialsPanel {
    /// Panel state for a selected account
    pub fn for_account(account: &Account) -> Self {
        if !account.has_credentials() {
            return Self::Hidden;
        }

        let username = if account.account_username.trim().is_empty() {
            None
        } else {
            Some(account.account_username.clone())
        };
        let password = if account.password.trim().is_empty() {
            None
        } else {
            Some(account.password.clone())
        };

        Self::Shown { username, password }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Yes/no confirmation before deleting the named section
    ConfirmDeleteSection(String),
    /// Name entry for a new section
    NewSection,
    /// Blocking notice the user must dismiss
    Alert(String),
}

/// Main application state
pub struct App {
    /// Client for the tracker server
    pub client: ApiClient,

    /// Last fetched view-model
    pub view_model: ViewModel,

    /// Sections whose account rows are currently hidden; cleared on every
    /// reload so the tree always comes back fully expanded
    pub collapsed: HashSet<String>,

    /// Selected index into the flattened tree rows
    pub selected_row: usize,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Account entry form state
    pub form: AccountForm,

    /// Rank result panel state
    pub rank_panel: RankPanel,

    /// Saved credentials panel state
    pub credentials_panel: CredentialsPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// New-section dialog state
    pub section_form: SectionFormState,

    /// Status message shown in the status bar
    pub status_message: Option<String>,

    /// Wall-clock time of the last successful reload, for the status bar
    pub last_reload: Option<String>,

    /// When the last reload was attempted
    last_reload_at: Instant,

    /// How often the view-model is reloaded without user input
    refresh_interval: Duration,

    /// Region used when the form's region field is left blank
    pub default_region: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: ApiClient, settings: &Settings) -> Self {
        let default_region = settings.default_region.clone();
        Self {
            client,
            view_model: ViewModel::default(),
            collapsed: HashSet::new(),
            selected_row: 0,
            focused_panel: FocusedPanel::default(),
            form: AccountForm::new(&default_region),
            rank_panel: RankPanel::default(),
            credentials_panel: CredentialsPanel::default(),
            active_dialog: ActiveDialog::default(),
            section_form: SectionFormState::new(),
            status_message: None,
            last_reload: None,
            last_reload_at: Instant::now(),
            refresh_interval: Duration::from_secs(settings.refresh_interval_secs),
            default_region,
            should_quit: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Open a blocking alert dialog
    pub fn alert(&mut self, message: impl Into<String>) {
        self.active_dialog = ActiveDialog::Alert(message.into());
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::NewSection {
            self.section_form = SectionFormState::new();
        }
        self.active_dialog = dialog;
    }

    /// Close any active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Whether a dialog is currently open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Flatten the grouped accounts into the rows the tree shows
    pub fn visible_rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for (name, accounts) in &self.view_model.accounts_by_section {
            let expanded = !self.collapsed.contains(name);
            rows.push(TreeRow::Section {
                name: name.clone(),
                expanded,
                deletable: name != DEFAULT_SECTION,
                count: accounts.len(),
            });
            if expanded {
                for index in 0..accounts.len() {
                    rows.push(TreeRow::Account {
                        section: name.clone(),
                        index,
                    });
                }
            }
        }
        rows
    }

    /// Account at a tree position, if it still exists
    pub fn account_at(&self, section: &str, index: usize) -> Option<&Account> {
        self.view_model.accounts_by_section.get(section)?.get(index)
    }

    /// The account under the cursor, if the selected row is an account
    pub fn selected_account(&self) -> Option<Account> {
        match self.visible_rows().get(self.selected_row)? {
            TreeRow::Account { section, index } => self.account_at(section, *index).cloned(),
            TreeRow::Section { .. } => None,
        }
    }

    /// Collapse or expand a section's account rows
    pub fn toggle_section(&mut self, name: &str) {
        if !self.collapsed.remove(name) {
            self.collapsed.insert(name.to_string());
        }
        self.clamp_selection();
    }

    /// Move the tree cursor down
    pub fn move_down(&mut self) {
        let count = self.visible_rows().len();
        if count > 0 && self.selected_row + 1 < count {
            self.selected_row += 1;
        }
    }

    /// Move the tree cursor up
    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_rows().len();
        if count == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= count {
            self.selected_row = count - 1;
        }
    }

    /// Replace the view-model with a freshly fetched one
    ///
    /// Resets collapse state so every section comes back expanded, and
    /// clamps the cursor and section selector against the new data.
    pub fn apply_view_model(&mut self, view_model: ViewModel) {
        self.view_model = view_model;
        self.collapsed.clear();
        self.clamp_selection();
        if self.form.section_index >= self.view_model.sections.len() {
            self.form.section_index = 0;
        }
        self.last_reload = Some(Local::now().format("%H:%M:%S").to_string());
    }

    /// Fetch the full view-model from the server and rebuild the tree
    pub fn reload(&mut self) {
        self.last_reload_at = Instant::now();
        match self.client.list_all() {
            Ok(view_model) => self.apply_view_model(view_model),
            Err(err) => self.set_status(format!("Reload failed: {}", err.user_message())),
        }
    }

    /// Reload once the refresh interval has passed; called on every tick
    pub fn on_tick(&mut self) {
        if self.last_reload_at.elapsed() >= self.refresh_interval {
            self.reload();
        }
    }

    /// Load the account under the cursor into the form and result panels
    pub fn select_account_row(&mut self) {
        let Some(account) = self.selected_account() else {
            return;
        };

        self.form.load_account(&account, &self.view_model.sections);
        self.credentials_panel = CredentialsPanel::for_account(&account);
        self.rank_panel = match &account.rank {
            Some(_) => RankPanel::Result(PlayerRank {
                player_name: account.riot_id(),
                rank: account.rank.clone(),
                rr: account.rr,
            }),
            None => RankPanel::Hidden,
        };
    }

    /// Show a rank lookup outcome in the rank panel
    ///
    /// An error replaces whatever result was displayed before, so stale
    /// rank text never lingers next to an error message.
    pub fn apply_check_result(&mut self, result: TrackerResult<PlayerRank>) {
        self.rank_panel = match result {
            Ok(rank) => RankPanel::Result(rank),
            Err(err) => RankPanel::Error(err.user_message()),
        };
    }

    /// Hide both result panels; used after deleting an account
    pub fn hide_result_panels(&mut self) {
        self.rank_panel = RankPanel::Hidden;
        self.credentials_panel = CredentialsPanel::Hidden;
    }
}
