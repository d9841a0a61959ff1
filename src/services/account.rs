//! Account service
//!
//! Business logic for saved accounts: upsert-by-key saves, deletion, the
//! grouped listing the client renders, and rank-only updates for the
//! background refresher.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, AccountKey, RankData, DEFAULT_SECTION};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

impl<'a> AccountService<'a> {
    /// Create a new account service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Get an account by key
    pub fn get(&self, key: &AccountKey) -> TrackerResult<Option<Account>> {
        self.storage.accounts.get(key)
    }

    /// List all accounts, sorted by key
    pub fn list(&self) -> TrackerResult<Vec<Account>> {
        self.storage.accounts.get_all()
    }

    /// List accounts grouped by section name
    pub fn list_by_section(&self) -> TrackerResult<BTreeMap<String, Vec<Account>>> {
        self.storage.accounts.get_by_section()
    }

    /// Save an account, inserting or fully overwriting by key
    ///
    /// A blank section lands the account in Default; a named section must
    /// exist. An account saved without fresh rank data keeps whatever rank
    /// was already stored for its key.
    pub fn save(&self, mut account: Account) -> TrackerResult<Account> {
        if account.username.trim().is_empty() || account.hashtag.trim().is_empty() {
            return Err(TrackerError::Validation(
                "In-game Name and Hashtag are required.".into(),
            ));
        }

        if account.region.trim().is_empty() {
            return Err(TrackerError::Validation("Region is required.".into()));
        }

        if account.section.trim().is_empty() {
            account.section = DEFAULT_SECTION.to_string();
        } else if !self.storage.sections.exists(&account.section)? {
            return Err(TrackerError::section_not_found(account.section));
        }

        if account.rank.is_none() {
            if let Some(existing) = self.storage.accounts.get(&account.key())? {
                account.rank = existing.rank;
                account.rr = existing.rr;
            }
        }

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        Ok(account)
    }

    /// Delete an account by key, returning whether it existed
    pub fn delete(&self, key: &AccountKey) -> TrackerResult<bool> {
        let removed = self.storage.accounts.delete(key)?;
        if removed {
            self.storage.accounts.save()?;
        }
        Ok(removed)
    }

    /// Apply fresh rank data to a stored account, returning whether it exists
    pub fn update_rank(&self, key: &AccountKey, data: &RankData) -> TrackerResult<bool> {
        let updated = self
            .storage
            .accounts
            .update_rank(key, data.rank.clone(), data.rr)?;
        if updated {
            self.storage.accounts.save()?;
        }
        Ok(updated)
    }
}
