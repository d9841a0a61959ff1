//! Rank lookup result models
//!
//! Shapes shared between the lookup client, the server's `check` action
//! and the client-side rank result panel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw result of an upstream rank lookup
///
/// An unranked or unparseable player yields `rank: None, rr: 0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankData {
    /// Competitive rank name (e.g. "Gold 2"), if known
    pub rank: Option<String>,
    /// Rank rating points
    pub rr: i64,
}

impl RankData {
    /// Create rank data from a known rank and rating
    pub fn new(rank: impl Into<String>, rr: i64) -> Self {
        Self {
            rank: Some(rank.into()),
            rr,
        }
    }

    /// Rank data for a player with no parseable rank
    pub fn none() -> Self {
        Self::default()
    }
}

/// A player's rank as reported by the `check` action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRank {
    /// Riot id, `username#hashtag`
    #[serde(rename = "playerName")]
    pub player_name: String,

    /// Competitive rank, absent when the player is unranked
    pub rank: Option<String>,

    /// Rank rating points
    #[serde(default)]
    pub rr: i64,
}

impl PlayerRank {
    /// Rank text for display, "N/A" when no rank is known
    pub fn rank_text(&self) -> String {
        self.rank.clone().unwrap_or_else(|| "N/A".to_string())
    }
}

impl fmt::Display for PlayerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {} RR", self.player_name, self.rank_text(), self.rr)
    }
}
