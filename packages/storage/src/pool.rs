// ABOUTME: SQLite connection pool setup
// ABOUTME: Opens the database file with the configured pragmas; never touches the schema

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::{debug, info};

use crate::{StorageConfig, StorageResult};

/// Open a pool for the configured database, creating the file if needed
pub async fn connect(config: &StorageConfig) -> StorageResult<SqlitePool> {
    let database_path = &config.database_path;

    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let busy_timeout = Duration::from_secs(config.busy_timeout_seconds);
    let journal_mode = if config.enable_wal {
        SqliteJournalMode::Wal
    } else {
        SqliteJournalMode::Delete
    };

    debug!(
        "Opening database at {} (wal: {}, max_connections: {})",
        database_path.display(),
        config.enable_wal,
        config.max_connections
    );

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .busy_timeout(busy_timeout)
        .journal_mode(journal_mode);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(busy_timeout)
        .connect_with(options)
        .await?;

    info!("Opened database at {}", database_path.display());

    Ok(pool)
}
