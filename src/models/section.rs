//! Section model
//!
//! Sections are named buckets that group saved accounts. The "Default"
//! section is reserved: it always exists and is never deletable, and it
//! receives the accounts of any section that gets deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the reserved fallback section
pub const DEFAULT_SECTION: &str = "Default";

/// A named grouping bucket for accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section name, unique across the store
    pub name: String,
}

impl Section {
    /// Create a new section
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Whether this is the reserved Default section
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_SECTION
    }

    /// Whether the user may delete this section
    pub fn is_deletable(&self) -> bool {
        !self.is_default()
    }

    /// Validate the section
    pub fn validate(&self) -> Result<(), SectionValidationError> {
        if self.name.trim().is_empty() {
            return Err(SectionValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionValidationError {
    EmptyName,
}

impl fmt::Display for SectionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Section name cannot be empty"),
        }
    }
}

impl std::error::Error for SectionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_section() {
        let section = Section::new("Smurfs");
        assert_eq!(section.name, "Smurfs");
        assert!(!section.is_default());
        assert!(section.is_deletable());
    }

    #[test]
    fn test_default_section_is_protected() {
        let section = Section::new(DEFAULT_SECTION);
        assert!(section.is_default());
        assert!(!section.is_deletable());
    }

    #[test]
    fn test_validation() {
        assert!(Section::new("Mains").validate().is_ok());
        assert_eq!(
            Section::new("   ").validate(),
            Err(SectionValidationError::EmptyName)
        );
    }

    #[test]
    fn test_serialization_shape() {
        let section = Section::new("Alpha");
        let json = serde_json::to_string(&section).unwrap();
        assert_eq!(json, r#"{"name":"Alpha"}"#);
    }
}
