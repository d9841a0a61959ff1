//! Storage initialization
//!
//! Handles first-run setup: loads both stores and seeds the reserved
//! Default section so it exists before any account can reference it.

use crate::error::TrackerError;
use crate::models::DEFAULT_SECTION;

use super::Storage;

/// Initialize storage for a fresh or existing installation
///
/// Loads sections and accounts from disk and makes sure the Default
/// section is present, persisting it if it had to be created.
pub fn initialize_storage(storage: &Storage) -> Result<(), TrackerError> {
    storage.load_all()?;

    if !storage.sections.exists(DEFAULT_SECTION)? {
        storage.sections.insert(DEFAULT_SECTION)?;
        storage.sections.save()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_seeds_default_section() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        initialize_storage(&storage).unwrap();

        assert!(storage.sections.exists(DEFAULT_SECTION).unwrap());
        assert!(storage.paths().sections_file().exists());
    }

    #[test]
    fn test_initialize_keeps_existing_sections() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let storage = Storage::new(paths.clone()).unwrap();
            initialize_storage(&storage).unwrap();
            storage.sections.insert("Smurfs").unwrap();
            storage.sections.save().unwrap();
        }

        let storage = Storage::new(paths).unwrap();
        initialize_storage(&storage).unwrap();

        assert!(storage.sections.exists("Smurfs").unwrap());
        assert!(storage.sections.exists(DEFAULT_SECTION).unwrap());
        assert_eq!(storage.sections.count().unwrap(), 2);
    }
}
