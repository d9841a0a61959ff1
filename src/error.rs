//! Custom error types for ranktrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The generic message shown for transport-level failures. Domain errors
/// reported by the server are surfaced verbatim instead.
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// The main error type for ranktrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Domain error reported by the tracker server, surfaced verbatim
    #[error("{0}")]
    Api(String),

    /// Transport-level HTTP errors (connection, timeout, malformed body)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream rank lookup errors
    #[error("Rank lookup failed: {0}")]
    Lookup(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl TrackerError {
    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for sections
    pub fn section_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Section",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The message to show the user: server-reported domain errors come
    /// through verbatim, anything else collapses to a generic notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(msg) => msg.clone(),
            _ => UNEXPECTED_ERROR.to_string(),
        }
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for ranktrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::account_not_found("Foo#1234 (na)");
        assert_eq!(err.to_string(), "Account not found: Foo#1234 (na)");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_api_error_is_verbatim() {
        let err = TrackerError::Api("Cannot delete the Default section.".into());
        assert_eq!(err.to_string(), "Cannot delete the Default section.");
        assert_eq!(err.user_message(), "Cannot delete the Default section.");
    }

    #[test]
    fn test_transport_error_is_generic() {
        let err = TrackerError::Http("connection refused".into());
        assert_eq!(err.user_message(), UNEXPECTED_ERROR);
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
