//! Storage layer for ranktrack
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Repositories use interior locking, so a `Storage` can be
//! shared across server worker threads as-is.

pub mod accounts;
pub mod file_io;
pub mod init;
pub mod sections;

pub use accounts::AccountRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use sections::SectionRepository;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TrackerPaths,
    pub sections: SectionRepository,
    pub accounts: AccountRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            sections: SectionRepository::new(paths.sections_file()),
            accounts: AccountRepository::new(paths.accounts_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), TrackerError> {
        self.sections.load()?;
        self.accounts.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrackerError> {
        self.sections.save()?;
        self.accounts.save()?;
        Ok(())
    }
}
