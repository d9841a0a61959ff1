//! User settings for ranktrack
//!
//! Manages the server bind address, the client's server URL, the upstream
//! rank lookup endpoint, and refresh timing.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings for ranktrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Address the tracker server binds to
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Port the tracker server listens on
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Base URL the client uses to reach the tracker server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Base URL of the upstream rank lookup service
    #[serde(default = "default_lookup_base_url")]
    pub lookup_base_url: String,

    /// Seconds between periodic reloads (client) and rank refreshes (server)
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Timeout for outbound HTTP requests, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Region assumed when none is given
    #[serde(default = "default_region")]
    pub default_region: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_listen_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u16 {
    8000
}

fn default_server_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_lookup_base_url() -> String {
    "https://valorantrank.chat".to_string()
}

fn default_refresh_interval_secs() -> u64 {
    60
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_region() -> String {
    "na".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            listen_addr: default_listen_addr(),
            listen_port: default_listen_port(),
            server_url: default_server_url(),
            lookup_base_url: default_lookup_base_url(),
            refresh_interval_secs: default_refresh_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            default_region: default_region(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TrackerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.listen_port, 8000);
        assert_eq!(settings.server_url, "http://127.0.0.1:8000");
        assert_eq!(settings.refresh_interval_secs, 60);
        assert_eq!(settings.default_region, "na");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.listen_port = 9100;
        settings.server_url = "http://127.0.0.1:9100".to_string();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.listen_port, 9100);
        assert_eq!(loaded.server_url, "http://127.0.0.1:9100");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"listen_port": 9000}"#).unwrap();
        assert_eq!(settings.listen_port, 9000);
        assert_eq!(settings.lookup_base_url, "https://valorantrank.chat");
        assert_eq!(settings.refresh_interval_secs, 60);
    }
}
