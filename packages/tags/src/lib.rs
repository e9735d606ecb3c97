// ABOUTME: Tag storage for Mentor
// ABOUTME: Provides the Tag type and the TagStore retrieve/search/save service

pub mod storage;
pub mod types;

// Re-export main types
pub use mentor_storage::{StorageError, StorageResult};
pub use storage::{TagStore, DEFAULT_TAG_TABLE};
pub use types::{format_timestamp, parse_timestamp, Tag, TIMESTAMP_FORMAT};
