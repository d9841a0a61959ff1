//! Account CLI commands
//!
//! Implements the one-shot account commands against a running tracker
//! server.

use clap::Subcommand;

use crate::client::ApiClient;
use crate::config::Settings;
use crate::display::format_account_tree;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, AccountKey};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// List all accounts grouped by section
    List,
    /// Save an account (creates or overwrites by name, hashtag and region)
    Save {
        /// In-game name
        username: String,
        /// Riot id tag (the part after '#')
        hashtag: String,
        /// Region the account plays in (defaults to the configured region)
        #[arg(short, long)]
        region: Option<String>,
        /// Login username to store alongside the account
        #[arg(long, default_value = "")]
        login: String,
        /// Login password to store alongside the account
        #[arg(long, default_value = "")]
        password: String,
        /// Section to file the account under (defaults to Default)
        #[arg(short, long, default_value = "")]
        section: String,
    },
    /// Delete an account
    Delete {
        /// In-game name
        username: String,
        /// Riot id tag
        hashtag: String,
        /// Region the account plays in (defaults to the configured region)
        #[arg(short, long)]
        region: Option<String>,
    },
}

/// Handle an account command
pub fn handle_account_command(
    client: &ApiClient,
    settings: &Settings,
    cmd: AccountCommands,
) -> TrackerResult<()> {
    match cmd {
        AccountCommands::List => {
            let view = client.list_all()?;
            print!("{}", format_account_tree(&view));
        }

        AccountCommands::Save {
            username,
            hashtag,
            region,
            login,
            password,
            section,
        } => {
            let region = region.unwrap_or_else(|| settings.default_region.clone());
            let mut account = Account::new(username, hashtag, region);
            account.account_username = login;
            account.password = password;
            account.section = section;

            account
                .validate()
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            client.save_account(&account)?;
            println!("Saved account: {}", account.label());
        }

        AccountCommands::Delete {
            username,
            hashtag,
            region,
        } => {
            let region = region.unwrap_or_else(|| settings.default_region.clone());
            let key = AccountKey::new(username, hashtag, region);

            // The server deletes idempotently; report a missing account
            // instead of claiming a delete happened.
            let view = client.list_all()?;
            let exists = view
                .accounts_by_section
                .values()
                .flatten()
                .any(|a| a.key() == key);
            if !exists {
                return Err(TrackerError::account_not_found(key.to_string()));
            }

            client.delete_account(&key)?;
            println!("Deleted account: {}", key);
        }
    }

    Ok(())
}
