//! Account repository for JSON storage
//!
//! Manages loading and saving accounts to accounts.json. Accounts are keyed
//! in memory by the (username, hashtag, region) triple; listings sort by
//! that same triple so output is stable across runs.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{Account, AccountKey};

use super::file_io::{read_json, write_json_atomic};

/// Serializable account data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct AccountData {
    pub accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    accounts: RwLock<HashMap<AccountKey, Account>>,
}

impl AccountRepository {
    /// Create a new account repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            accounts: RwLock::new(HashMap::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: AccountData = read_json(&self.path)?;

        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        accounts.clear();
        for account in file_data.accounts {
            accounts.insert(account.key(), account);
        }

        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = accounts.values().cloned().collect();
        list.sort_by_key(|a| (a.username.clone(), a.hashtag.clone(), a.region.clone()));

        let file_data = AccountData { accounts: list };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an account by key
    pub fn get(&self, key: &AccountKey) -> Result<Option<Account>, TrackerError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(accounts.get(key).cloned())
    }

    /// Get all accounts, sorted by key
    pub fn get_all(&self) -> Result<Vec<Account>, TrackerError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = accounts.values().cloned().collect();
        list.sort_by_key(|a| (a.username.clone(), a.hashtag.clone(), a.region.clone()));
        Ok(list)
    }

    /// Get all accounts grouped by section, keys ordered by section name
    ///
    /// Sections with no accounts do not appear in the result.
    pub fn get_by_section(&self) -> Result<BTreeMap<String, Vec<Account>>, TrackerError> {
        let list = self.get_all()?;

        let mut grouped: BTreeMap<String, Vec<Account>> = BTreeMap::new();
        for account in list {
            grouped
                .entry(account.section.clone())
                .or_default()
                .push(account);
        }

        Ok(grouped)
    }

    /// Insert or fully overwrite the account with the same key
    pub fn upsert(&self, account: Account) -> Result<(), TrackerError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        accounts.insert(account.key(), account);
        Ok(())
    }

    /// Delete an account, returning whether it was present
    pub fn delete(&self, key: &AccountKey) -> Result<bool, TrackerError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(accounts.remove(key).is_some())
    }

    /// Update only the rank data of an account, returning whether it exists
    pub fn update_rank(
        &self,
        key: &AccountKey,
        rank: Option<String>,
        rr: i64,
    ) -> Result<bool, TrackerError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match accounts.get_mut(key) {
            Some(account) => {
                account.rank = rank;
                account.rr = rr;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Move every account in `from` to the `to` section, returning how many moved
    pub fn reassign_section(&self, from: &str, to: &str) -> Result<usize, TrackerError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut moved = 0;
        for account in accounts.values_mut() {
            if account.section == from {
                account.section = to.to_string();
                moved += 1;
            }
        }

        Ok(moved)
    }

    /// Count accounts
    pub fn count(&self) -> Result<usize, TrackerError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, AccountRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        let repo = AccountRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_is_keyed_on_triple() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut account = Account::new("Foo", "1234", "na");
        repo.upsert(account.clone()).unwrap();

        // Same key overwrites
        account.password = "hunter2".to_string();
        repo.upsert(account.clone()).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let stored = repo.get(&account.key()).unwrap().unwrap();
        assert_eq!(stored.password, "hunter2");

        // Different region is a different account
        repo.upsert(Account::new("Foo", "1234", "eu")).unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let account = Account::new("Foo", "1234", "na");
        let key = account.key();
        repo.upsert(account).unwrap();

        assert!(repo.delete(&key).unwrap());
        assert!(!repo.delete(&key).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_sorted_by_key() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Account::new("Zed", "9", "na")).unwrap();
        repo.upsert(Account::new("Amy", "1", "na")).unwrap();
        repo.upsert(Account::new("Amy", "1", "eu")).unwrap();

        let keys: Vec<String> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|a| format!("{}/{}", a.username, a.region))
            .collect();
        assert_eq!(keys, vec!["Amy/eu", "Amy/na", "Zed/na"]);
    }

    #[test]
    fn test_grouping_by_section() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut main = Account::new("Amy", "1", "na");
        main.section = "Mains".to_string();
        let smurf = Account::new("Bob", "2", "na");

        repo.upsert(main).unwrap();
        repo.upsert(smurf).unwrap();

        let grouped = repo.get_by_section().unwrap();
        let sections: Vec<&String> = grouped.keys().collect();
        assert_eq!(sections, vec!["Default", "Mains"]);
        assert_eq!(grouped["Mains"].len(), 1);
        assert_eq!(grouped["Default"][0].username, "Bob");
    }

    #[test]
    fn test_update_rank_touches_only_rank_fields() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut account = Account::new("Foo", "1234", "na");
        account.password = "hunter2".to_string();
        let key = account.key();
        repo.upsert(account).unwrap();

        assert!(repo
            .update_rank(&key, Some("Gold 2".to_string()), 45)
            .unwrap());

        let stored = repo.get(&key).unwrap().unwrap();
        assert_eq!(stored.rank.as_deref(), Some("Gold 2"));
        assert_eq!(stored.rr, 45);
        assert_eq!(stored.password, "hunter2");

        let missing = AccountKey::new("Nobody", "0", "na");
        assert!(!repo.update_rank(&missing, None, 0).unwrap());
    }

    #[test]
    fn test_reassign_section() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut a = Account::new("Amy", "1", "na");
        a.section = "Smurfs".to_string();
        let mut b = Account::new("Bob", "2", "na");
        b.section = "Smurfs".to_string();
        let c = Account::new("Cid", "3", "na");

        repo.upsert(a).unwrap();
        repo.upsert(b).unwrap();
        repo.upsert(c).unwrap();

        let moved = repo.reassign_section("Smurfs", "Default").unwrap();
        assert_eq!(moved, 2);

        let grouped = repo.get_by_section().unwrap();
        assert_eq!(grouped["Default"].len(), 3);
        assert!(!grouped.contains_key("Smurfs"));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut account = Account::new("Foo", "1234", "na");
        account.rank = Some("Gold 2".to_string());
        account.rr = 45;
        let key = account.key();
        repo.upsert(account).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("accounts.json");
        let repo2 = AccountRepository::new(path);
        repo2.load().unwrap();

        let stored = repo2.get(&key).unwrap().unwrap();
        assert_eq!(stored.rank.as_deref(), Some("Gold 2"));
        assert_eq!(stored.rr, 45);
    }
}
