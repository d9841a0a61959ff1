//! Service layer for ranktrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and cross-entity operations like section deletion
//! with account reassignment.

pub mod account;
pub mod section;

pub use account::AccountService;
pub use section::SectionService;
