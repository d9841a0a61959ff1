//! Section service
//!
//! Business logic for section management: creation with duplicate
//! rejection, and deletion with the Default-section protection and
//! account reassignment.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Section, DEFAULT_SECTION};
use crate::storage::Storage;

/// Service for section management
pub struct SectionService<'a> {
    storage: &'a Storage,
}

impl<'a> SectionService<'a> {
    /// Create a new section service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all sections, ordered by name
    pub fn list(&self) -> TrackerResult<Vec<Section>> {
        self.storage.sections.get_all()
    }

    /// Create a new, empty section
    pub fn create(&self, name: &str) -> TrackerResult<Section> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(
                "Section name cannot be empty.".into(),
            ));
        }

        if !self.storage.sections.insert(name)? {
            return Err(TrackerError::Duplicate {
                entity_type: "Section",
                identifier: name.to_string(),
            });
        }

        self.storage.sections.save()?;

        Ok(Section::new(name))
    }

    /// Delete a section, moving its accounts to the Default section first
    ///
    /// Returns how many accounts were reassigned. Deleting the Default
    /// section (or a blank name) is rejected; deleting a section that does
    /// not exist is a no-op.
    pub fn delete(&self, name: &str) -> TrackerResult<usize> {
        let name = name.trim();
        if name.is_empty() || name == DEFAULT_SECTION {
            return Err(TrackerError::Validation(
                "Cannot delete the Default section.".into(),
            ));
        }

        // Reassign before removing so no account is ever left pointing at
        // a section that is already gone.
        let moved = self.storage.accounts.reassign_section(name, DEFAULT_SECTION)?;
        if moved > 0 {
            self.storage.accounts.save()?;
        }

        if self.storage.sections.remove(name)? {
            self.storage.sections.save()?;
        }

        Ok(moved)
    }
}
