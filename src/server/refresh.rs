//! Background rank refresher
//!
//! Periodically walks every stored account and re-fetches its rank from
//! the lookup service, pausing between lookups so the upstream is never
//! hammered. Failures are logged and skipped; a missing or unparseable
//! rank leaves the stored data untouched.

use std::time::Duration;

use actix_web::web;
use tracing::{debug, info, warn};

use crate::lookup::RankClient;
use crate::services::AccountService;
use crate::storage::Storage;

/// Pause between consecutive lookups within one refresh cycle
const LOOKUP_PAUSE: Duration = Duration::from_secs(1);

/// Drive refresh cycles forever, sleeping `interval` between them
///
/// The first cycle runs immediately, so freshly started servers converge
/// without waiting a full interval.
pub async fn run_refresher(
    storage: web::Data<Storage>,
    lookup: web::Data<RankClient>,
    interval: Duration,
) {
    loop {
        refresh_all_accounts(&storage, &lookup, LOOKUP_PAUSE).await;
        actix_web::rt::time::sleep(interval).await;
    }
}

/// Run a single refresh cycle over a snapshot of the stored accounts
///
/// Accounts deleted while the cycle runs are skipped silently; the
/// snapshot means a concurrent save is picked up next cycle.
pub async fn refresh_all_accounts(storage: &Storage, lookup: &RankClient, pause: Duration) {
    let accounts = match AccountService::new(storage).list() {
        Ok(accounts) => accounts,
        Err(err) => {
            warn!(error = %err, "rank refresh skipped: account listing failed");
            return;
        }
    };

    if accounts.is_empty() {
        return;
    }

    let total = accounts.len();
    let mut refreshed = 0;

    for account in accounts {
        let key = account.key();
        match lookup
            .fetch_rank(&account.username, &account.hashtag, &account.region)
            .await
        {
            Ok(data) if data.rank.is_some() => {
                match AccountService::new(storage).update_rank(&key, &data) {
                    Ok(true) => {
                        refreshed += 1;
                        debug!(account = %key, rank = ?data.rank, rr = data.rr, "rank updated");
                    }
                    Ok(false) => debug!(account = %key, "account deleted mid-cycle"),
                    Err(err) => warn!(account = %key, error = %err, "rank update failed"),
                }
            }
            Ok(_) => debug!(account = %key, "no rank data for account"),
            Err(err) => warn!(account = %key, error = %err, "rank lookup failed"),
        }

        actix_web::rt::time::sleep(pause).await;
    }

    info!(refreshed, total, "rank refresh cycle complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::Account;
    use crate::storage::initialize_storage;
    use tempfile::TempDir;

    fn test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        initialize_storage(&storage).unwrap();
        (temp_dir, storage)
    }

    #[actix_web::test]
    async fn test_unreachable_lookup_keeps_stored_ranks() {
        let (_dir, storage) = test_storage();
        let mut account = Account::new("Amy", "111", "na");
        account.rank = Some("Gold 2".to_string());
        account.rr = 45;
        AccountService::new(&storage).save(account).unwrap();

        let lookup =
            RankClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        refresh_all_accounts(&storage, &lookup, Duration::ZERO).await;

        let stored = AccountService::new(&storage)
            .get(&crate::models::AccountKey::new("Amy", "111", "na"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.rank.as_deref(), Some("Gold 2"));
        assert_eq!(stored.rr, 45);
    }

    #[actix_web::test]
    async fn test_empty_store_cycle_is_a_no_op() {
        let (_dir, storage) = test_storage();
        let lookup =
            RankClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        refresh_all_accounts(&storage, &lookup, Duration::ZERO).await;
        assert!(AccountService::new(&storage).list().unwrap().is_empty());
    }
}
