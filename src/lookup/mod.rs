//! Upstream rank lookup client
//!
//! Fetches a player's competitive rank from the public lookup service and
//! parses the response, which may arrive as JSON or as plain text like
//! `"Gold 2 45 RR"`. Parsing is pure so it can be tested without a network.

use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::error::TrackerError;
use crate::models::RankData;

/// Matches text responses of the form "<rank> <rr> RR" (colons stripped)
fn rank_text_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*\S)\s+(\d+)\s*RR$").expect("hard-coded pattern"))
}

/// Unwraps a rank written in brackets, e.g. "Foo#1 [Diamond 2]" -> "Diamond 2"
fn bracket_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^.*\[(.*)\]$").expect("hard-coded pattern"))
}

/// Errors from a lookup attempt
///
/// The server's `check` handler distinguishes upstream status errors (the
/// player probably does not exist) from transport failures.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The lookup service answered with an error status
    #[error("API Error (Status: {0}). Player may not exist.")]
    Status(u16),

    /// The request itself failed (connect, timeout, body read)
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Request(err.to_string()),
        }
    }
}

impl From<LookupError> for TrackerError {
    fn from(err: LookupError) -> Self {
        TrackerError::Lookup(err.to_string())
    }
}

/// Client for the upstream rank lookup service
pub struct RankClient {
    base_url: String,
    client: reqwest::Client,
}

impl RankClient {
    /// Create a new lookup client against the given base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch rank data for a player
    ///
    /// An unranked or unparseable player is a successful lookup with
    /// `rank: None`; an upstream error status or transport failure is an
    /// error.
    pub async fn fetch_rank(
        &self,
        username: &str,
        hashtag: &str,
        region: &str,
    ) -> Result<RankData, LookupError> {
        let url = format!("{}/{}/{}/{}", self.base_url, region, username, hashtag);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;

        Ok(parse_rank_response(&body))
    }
}

/// Parse a lookup response body into rank data
///
/// JSON bodies are accepted with the payload either at the top level or
/// under a `data` key; a payload without a `rank` field yields no rank.
/// Non-JSON bodies are matched against the "<rank> <rr> RR" text form with
/// any colons removed first; text that doesn't match is taken whole as the
/// rank name, the way the lookup service renders unranked players.
pub fn parse_rank_response(body: &str) -> RankData {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let payload = value.get("data").unwrap_or(&value);
        if payload.is_object() && payload.get("rank").is_some() {
            return RankData {
                rank: payload["rank"].as_str().map(String::from),
                rr: payload["rr"].as_i64().unwrap_or(0),
            };
        }
        return RankData::none();
    }

    parse_rank_text(body)
}

/// Parse the plain-text response form
fn parse_rank_text(body: &str) -> RankData {
    let cleaned = body.trim().replace(':', "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return RankData::none();
    }

    match rank_text_regex().captures(cleaned) {
        Some(caps) => {
            let mut rank = caps[1].trim().to_string();
            if let Some(inner) = bracket_regex().captures(&rank) {
                rank = inner[1].trim().to_string();
            }
            let rr = caps[2].parse::<i64>().unwrap_or(0);
            RankData {
                rank: Some(rank),
                rr,
            }
        }
        // No "<n> RR" suffix; the body itself is the rank (e.g. "Unranked")
        None => RankData {
            rank: Some(body.trim().to_string()),
            rr: 0,
        },
    }
}
