//! Account model
//!
//! Represents a saved player identity: the Riot id triple plus optional
//! login credentials and the last rank data fetched for it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::section::DEFAULT_SECTION;

/// Composite key identifying an account
///
/// Uniqueness is enforced on the full triple; all three parts are
/// case-sensitive strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountKey {
    /// In-game name
    pub username: String,
    /// Riot id tag (the part after `#`)
    pub hashtag: String,
    /// Region the account plays in (e.g. "na", "eu")
    pub region: String,
}

impl AccountKey {
    /// Create a new account key
    pub fn new(
        username: impl Into<String>,
        hashtag: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            hashtag: hashtag.into(),
            region: region.into(),
        }
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} ({})", self.username, self.hashtag, self.region)
    }
}

/// A saved player account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// In-game name
    pub username: String,

    /// Riot id tag
    pub hashtag: String,

    /// Region the account plays in
    pub region: String,

    /// Saved login username (opaque, may be empty)
    #[serde(default)]
    pub account_username: String,

    /// Saved login password (opaque, stored as given)
    #[serde(default)]
    pub password: String,

    /// Last fetched competitive rank, if any
    #[serde(default)]
    pub rank: Option<String>,

    /// Last fetched rank rating
    #[serde(default)]
    pub rr: i64,

    /// Name of the section this account belongs to
    #[serde(default = "default_section_name")]
    pub section: String,
}

fn default_section_name() -> String {
    DEFAULT_SECTION.to_string()
}

impl Account {
    /// Create a new account with empty credentials and no rank data,
    /// assigned to the Default section
    pub fn new(
        username: impl Into<String>,
        hashtag: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            hashtag: hashtag.into(),
            region: region.into(),
            account_username: String::new(),
            password: String::new(),
            rank: None,
            rr: 0,
            section: default_section_name(),
        }
    }

    /// The composite key identifying this account
    pub fn key(&self) -> AccountKey {
        AccountKey::new(
            self.username.clone(),
            self.hashtag.clone(),
            self.region.clone(),
        )
    }

    /// The Riot id, `username#hashtag`
    pub fn riot_id(&self) -> String {
        format!("{}#{}", self.username, self.hashtag)
    }

    /// Row label shown in account listings, `username#hashtag (REGION)`
    pub fn label(&self) -> String {
        format!(
            "{}#{} ({})",
            self.username,
            self.hashtag,
            self.region.to_uppercase()
        )
    }

    /// Rank summary shown next to the label
    pub fn rank_summary(&self) -> String {
        match &self.rank {
            Some(rank) => format!("{} - {} RR", rank, self.rr),
            None => "No rank data".to_string(),
        }
    }

    /// Whether any login credential is saved (after trimming)
    pub fn has_credentials(&self) -> bool {
        !self.account_username.trim().is_empty() || !self.password.trim().is_empty()
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.username.trim().is_empty() {
            return Err(AccountValidationError::EmptyUsername);
        }

        if self.hashtag.trim().is_empty() {
            return Err(AccountValidationError::EmptyHashtag);
        }

        if self.region.trim().is_empty() {
            return Err(AccountValidationError::EmptyRegion);
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyUsername,
    EmptyHashtag,
    EmptyRegion,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "In-game name cannot be empty"),
            Self::EmptyHashtag => write!(f, "Hashtag cannot be empty"),
            Self::EmptyRegion => write!(f, "Region cannot be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Foo", "1234", "na");
        assert_eq!(account.username, "Foo");
        assert_eq!(account.hashtag, "1234");
        assert_eq!(account.region, "na");
        assert_eq!(account.section, "Default");
        assert!(account.rank.is_none());
        assert_eq!(account.rr, 0);
    }

    #[test]
    fn test_key_and_riot_id() {
        let account = Account::new("Foo", "1234", "na");
        assert_eq!(account.key(), AccountKey::new("Foo", "1234", "na"));
        assert_eq!(account.riot_id(), "Foo#1234");
    }

    #[test]
    fn test_label_uppercases_region() {
        let account = Account::new("Foo", "1234", "na");
        assert_eq!(account.label(), "Foo#1234 (NA)");
    }

    #[test]
    fn test_rank_summary() {
        let mut account = Account::new("Foo", "1234", "na");
        assert_eq!(account.rank_summary(), "No rank data");

        account.rank = Some("Gold 2".to_string());
        account.rr = 45;
        assert_eq!(account.rank_summary(), "Gold 2 - 45 RR");
    }

    #[test]
    fn test_has_credentials() {
        let mut account = Account::new("Foo", "1234", "na");
        assert!(!account.has_credentials());

        account.password = "   ".to_string();
        assert!(!account.has_credentials());

        account.password = "hunter2".to_string();
        assert!(account.has_credentials());

        account.password.clear();
        account.account_username = "foo_smurf".to_string();
        assert!(account.has_credentials());
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Foo", "1234", "na");
        assert!(account.validate().is_ok());

        account.username = "  ".to_string();
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::EmptyUsername)
        );

        account.username = "Foo".to_string();
        account.hashtag = String::new();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyHashtag));
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let json = r#"{"username": "Foo", "hashtag": "1234", "region": "na"}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_username, "");
        assert_eq!(account.password, "");
        assert!(account.rank.is_none());
        assert_eq!(account.rr, 0);
        assert_eq!(account.section, "Default");
    }

    #[test]
    fn test_key_display() {
        let key = AccountKey::new("Foo", "1234", "na");
        assert_eq!(key.to_string(), "Foo#1234 (na)");
    }
}
