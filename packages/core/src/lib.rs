// ABOUTME: Core paths and validation helpers for Mentor
// ABOUTME: Foundational package shared by the storage, tags, and CLI packages

pub mod constants;
pub mod validation;

// Re-export constants
pub use constants::{database_file, mentor_dir, DATABASE_FILE_NAME};

// Re-export validation
pub use validation::{require_non_empty, validate_identifier, ValidationError};
