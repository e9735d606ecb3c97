// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Retrieve by name, substring search, and authorization upsert

use chrono::{NaiveDateTime, Utc};
use mentor_core::{require_non_empty, validate_identifier};
use mentor_storage::{StorageError, StorageResult};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{format_timestamp, parse_timestamp, Tag};

/// Table used when no other is configured
pub const DEFAULT_TAG_TABLE: &str = "tag";

/// Reads and writes tags against a caller-owned pool.
///
/// The table is expected to exist with a unique `name` TEXT column, an
/// `authorized` INTEGER (0/1) column, and an `added` timestamp column stored as
/// `YYYY-MM-DD HH:MM:SS`.
pub struct TagStore {
    pool: SqlitePool,
    table: String,
}

impl TagStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            table: DEFAULT_TAG_TABLE.to_string(),
        }
    }

    /// Use a table other than `tag`; the name must be a plain identifier
    pub fn with_table(pool: SqlitePool, table: &str) -> StorageResult<Self> {
        validate_identifier(table)?;
        Ok(Self {
            pool,
            table: table.to_string(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Fill a tag from the store by name.
    ///
    /// A missing row is not an error: the input comes back unchanged.
    pub async fn retrieve(&self, mut tag: Tag) -> StorageResult<Tag> {
        let Some(stored) = self.find(&tag.name).await? else {
            return Ok(tag);
        };

        tag.added = stored.added;
        tag.authorized = stored.authorized;

        Ok(tag)
    }

    /// Get a tag by name, or `None` when no row exists
    pub async fn find(&self, name: &str) -> StorageResult<Option<Tag>> {
        require_non_empty(name, "tag must have a name")?;

        debug!("Fetching tag by name: {}", name);

        let query = format!(
            "SELECT name, authorized, added FROM {} WHERE name = ?",
            self.table
        );
        let row = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(row_to_tag(&r)?)),
            None => {
                debug!("Tag not found: {}", name);
                Ok(None)
            }
        }
    }

    /// Find every tag whose name contains `term`
    pub async fn search_by_term(&self, term: &str) -> StorageResult<Vec<Tag>> {
        require_non_empty(term, "search term required")?;

        debug!("Searching tags containing: {}", term);

        let query = format!(
            r"SELECT name, authorized, added FROM {} WHERE name LIKE '%' || ? || '%' ESCAPE '\'",
            self.table
        );
        let rows = sqlx::query(&query)
            .bind(escape_like(term))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        debug!("Found {} tags containing: {}", rows.len(), term);

        rows.iter().map(row_to_tag).collect()
    }

    /// Insert a tag, or update only its authorization if the name exists.
    ///
    /// An unset `added` is stamped with the current UTC time. Returns the
    /// store so saves can be chained.
    pub async fn save(&self, tag: &Tag) -> StorageResult<&Self> {
        require_non_empty(&tag.name, "tag missing a name")?;

        let added = tag.added.unwrap_or_else(|| Utc::now().naive_utc());

        debug!("Saving tag: {} (authorized: {})", tag.name, tag.authorized);

        let query = format!(
            r#"
            INSERT INTO {} (name, authorized, added)
            VALUES (?, ?, ?)
            ON CONFLICT(name) DO UPDATE SET
                authorized = excluded.authorized
            "#,
            self.table
        );
        sqlx::query(&query)
            .bind(&tag.name)
            .bind(i64::from(tag.authorized))
            .bind(format_timestamp(&added))
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(self)
    }
}

/// Convert a database row to a Tag
fn row_to_tag(row: &SqliteRow) -> StorageResult<Tag> {
    Ok(Tag {
        name: row.try_get("name").map_err(StorageError::Sqlx)?,
        added: read_added(row)?,
        authorized: read_authorized(row)?,
    })
}

fn read_added(row: &SqliteRow) -> StorageResult<Option<NaiveDateTime>> {
    let raw: Option<String> = row.try_get("added").map_err(StorageError::Sqlx)?;
    raw.as_deref().map(parse_timestamp).transpose()
}

fn read_authorized(row: &SqliteRow) -> StorageResult<bool> {
    let flag: Option<i64> = row.try_get("authorized").map_err(StorageError::Sqlx)?;
    Ok(flag == Some(1))
}

/// Escape LIKE wildcards so the term matches literally under `ESCAPE '\'`
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
