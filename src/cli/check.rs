//! Rank check command
//!
//! One-shot rank lookup through a running tracker server.

use crate::client::ApiClient;
use crate::config::Settings;
use crate::display::format_player_rank;
use crate::error::TrackerResult;

/// Look up a player's current rank and print it
pub fn handle_check_command(
    client: &ApiClient,
    settings: &Settings,
    username: &str,
    hashtag: &str,
    region: Option<String>,
) -> TrackerResult<()> {
    let region = region.unwrap_or_else(|| settings.default_region.clone());
    let rank = client.check_rank(username, hashtag, &region)?;
    print!("{}", format_player_rank(&rank));

    Ok(())
}
