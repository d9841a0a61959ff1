//! Section repository for JSON storage
//!
//! Manages loading and saving section names to sections.json. Names are
//! kept in a sorted set, so every listing comes back ordered by name.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::Section;

use super::file_io::{read_json, write_json_atomic};

/// Serializable section data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SectionData {
    pub sections: Vec<Section>,
}

/// Repository for section persistence
pub struct SectionRepository {
    path: PathBuf,
    names: RwLock<BTreeSet<String>>,
}

impl SectionRepository {
    /// Create a new section repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            names: RwLock::new(BTreeSet::new()),
        }
    }

    /// Load sections from disk
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: SectionData = read_json(&self.path)?;

        let mut names = self
            .names
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        names.clear();
        for section in file_data.sections {
            names.insert(section.name);
        }

        Ok(())
    }

    /// Save sections to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let names = self
            .names
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = SectionData {
            sections: names.iter().map(Section::new).collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get all sections, ordered by name
    pub fn get_all(&self) -> Result<Vec<Section>, TrackerError> {
        let names = self
            .names
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(names.iter().map(Section::new).collect())
    }

    /// Check whether a section exists
    pub fn exists(&self, name: &str) -> Result<bool, TrackerError> {
        let names = self
            .names
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(names.contains(name))
    }

    /// Insert a section, returning false if the name was already present
    pub fn insert(&self, name: impl Into<String>) -> Result<bool, TrackerError> {
        let mut names = self
            .names
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(names.insert(name.into()))
    }

    /// Remove a section, returning whether it was present
    pub fn remove(&self, name: &str) -> Result<bool, TrackerError> {
        let mut names = self
            .names
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(names.remove(name))
    }

    /// Count sections
    pub fn count(&self) -> Result<usize, TrackerError> {
        let names = self
            .names
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(names.len())
    }
}
