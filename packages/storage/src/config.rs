// ABOUTME: Storage configuration with environment overrides
// ABOUTME: Database location, pool size, busy timeout, and journal mode

use mentor_config::{
    MENTOR_DATABASE_PATH, MENTOR_DB_BUSY_TIMEOUT_SECS, MENTOR_DB_ENABLE_WAL,
    MENTOR_DB_MAX_CONNECTIONS,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{StorageError, StorageResult};

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub database_path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: mentor_core::database_file(),
            enable_wal: true,
            max_connections: 5,
            busy_timeout_seconds: 30,
        }
    }
}

impl StorageConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> StorageResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; set but unparseable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> StorageResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_path = lookup(MENTOR_DATABASE_PATH)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.database_path);

        let max_connections =
            parse_var(&lookup, MENTOR_DB_MAX_CONNECTIONS)?.unwrap_or(defaults.max_connections);
        if max_connections == 0 {
            return Err(StorageError::Configuration(format!(
                "{} must be at least 1",
                MENTOR_DB_MAX_CONNECTIONS
            )));
        }

        let busy_timeout_seconds = parse_var(&lookup, MENTOR_DB_BUSY_TIMEOUT_SECS)?
            .unwrap_or(defaults.busy_timeout_seconds);

        let enable_wal = match lookup(MENTOR_DB_ENABLE_WAL) {
            Some(value) => parse_bool(MENTOR_DB_ENABLE_WAL, &value)?,
            None => defaults.enable_wal,
        };

        Ok(Self {
            database_path,
            enable_wal,
            max_connections,
            busy_timeout_seconds,
        })
    }

    /// Use a specific database file instead of the configured one
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> StorageResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse::<T>().map(Some).map_err(|_| {
            StorageError::Configuration(format!("Invalid value for {}: '{}'", key, value))
        }),
        None => Ok(None),
    }
}

fn parse_bool(key: &str, value: &str) -> StorageResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(StorageError::Configuration(format!(
            "Invalid boolean for {}: '{}'. Must be 'true' or 'false'",
            key, value
        ))),
    }
}
