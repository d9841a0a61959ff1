//! HTTP client for the tracker server
//!
//! This is the request layer the TUI and the one-shot CLI commands share.
//! The server is the single source of truth: nothing is cached here, and
//! every mutation is expected to be followed by a fresh [`ApiClient::list_all`].
//!
//! Responses are read as JSON bodies regardless of HTTP status; a domain
//! failure is reported inside the body (`success: false` plus an `error`
//! string, or a bare `error` field) and surfaces verbatim as
//! [`TrackerError::Api`]. Anything that keeps a body from arriving or
//! parsing is a transport failure, [`TrackerError::Http`].

use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, AccountKey, PlayerRank, Section};

/// The client-side view-model: one full snapshot of the server state
///
/// Sections keep the server's order; the account mapping is key-ordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub sections: Vec<Section>,
    pub accounts_by_section: BTreeMap<String, Vec<Account>>,
}

impl ViewModel {
    /// Total number of accounts across all sections
    pub fn account_count(&self) -> usize {
        self.accounts_by_section.values().map(Vec::len).sum()
    }
}

/// Mutation response envelope: `{"success": bool}` with an optional error
#[derive(Debug, Clone, Deserialize)]
struct ActionResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// `check` response: either a player rank or an error object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CheckResponse {
    Rank(PlayerRank),
    Error { error: String },
}

/// Turn a mutation envelope into a result, surfacing the server's message
fn interpret_action(response: ActionResponse) -> TrackerResult<()> {
    if response.success {
        Ok(())
    } else {
        let message = response
            .error
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(TrackerError::Api(message))
    }
}

/// Turn a `check` response into a result
fn interpret_check(response: CheckResponse) -> TrackerResult<PlayerRank> {
    match response {
        CheckResponse::Rank(rank) => Ok(rank),
        CheckResponse::Error { error } => Err(TrackerError::Api(error)),
    }
}

/// Blocking HTTP client for the tracker server
pub struct ApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a new client against the given server base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> TrackerResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The server base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> TrackerResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send()?;
        Ok(response.json()?)
    }

    fn post_form<T: DeserializeOwned>(&self, form: &[(&str, &str)]) -> TrackerResult<T> {
        let response = self.client.post(&self.base_url).form(form).send()?;
        Ok(response.json()?)
    }

    /// Fetch the sections list, in server order
    pub fn list_sections(&self) -> TrackerResult<Vec<Section>> {
        self.get_json("/get_sections")
    }

    /// Fetch all accounts grouped by section
    pub fn list_accounts(&self) -> TrackerResult<BTreeMap<String, Vec<Account>>> {
        self.get_json("/get_accounts")
    }

    /// Fetch the full view-model: sections plus grouped accounts
    ///
    /// The server omits empty sections from the account grouping; they are
    /// seeded back here so every section shows up in the tree.
    pub fn list_all(&self) -> TrackerResult<ViewModel> {
        let sections = self.list_sections()?;
        let mut accounts_by_section = self.list_accounts()?;
        for section in &sections {
            accounts_by_section.entry(section.name.clone()).or_default();
        }

        Ok(ViewModel {
            sections,
            accounts_by_section,
        })
    }

    /// Look up a player's current rank through the server
    pub fn check_rank(
        &self,
        username: &str,
        hashtag: &str,
        region: &str,
    ) -> TrackerResult<PlayerRank> {
        let response = self.post_form(&[
            ("action", "check"),
            ("username", username),
            ("hashtag", hashtag),
            ("region", region),
        ])?;
        interpret_check(response)
    }

    /// Save an account (upsert by key on the server)
    pub fn save_account(&self, account: &Account) -> TrackerResult<()> {
        let response = self.post_form(&[
            ("action", "save"),
            ("username", &account.username),
            ("hashtag", &account.hashtag),
            ("region", &account.region),
            ("account_username", &account.account_username),
            ("password", &account.password),
            ("section", &account.section),
        ])?;
        interpret_action(response)
    }

    /// Delete an account by key
    pub fn delete_account(&self, key: &AccountKey) -> TrackerResult<()> {
        let response = self.post_form(&[
            ("action", "delete"),
            ("username", &key.username),
            ("hashtag", &key.hashtag),
            ("region", &key.region),
        ])?;
        interpret_action(response)
    }

    /// Create a new, empty section
    pub fn create_section(&self, name: &str) -> TrackerResult<()> {
        let response = self.post_form(&[("action", "create_section"), ("section_name", name)])?;
        interpret_action(response)
    }

    /// Delete a section; its accounts move to Default on the server
    pub fn delete_section(&self, name: &str) -> TrackerResult<()> {
        let response = self.post_form(&[("action", "delete_section"), ("section_name", name)])?;
        interpret_action(response)
    }
}
