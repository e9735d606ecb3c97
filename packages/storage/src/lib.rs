// ABOUTME: Data layer plumbing for Mentor
// ABOUTME: Storage errors, connection configuration, and SQLite pool setup

use mentor_core::ValidationError;
use thiserror::Error;

pub mod config;
pub mod pool;

pub use config::StorageConfig;
pub use pool::connect;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Caller supplied an unusable argument; nothing was sent to the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// True when the failure was raised before touching the store
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StorageError::InvalidInput(_))
    }
}

impl From<ValidationError> for StorageError {
    fn from(err: ValidationError) -> Self {
        StorageError::InvalidInput(err.to_string())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;
