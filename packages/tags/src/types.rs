// ABOUTME: Tag type definitions
// ABOUTME: The Tag value plus conversions for its stored timestamp format

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use mentor_storage::{StorageError, StorageResult};
use serde::{Deserialize, Serialize};

/// Format of the `added` column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A named label with an authorization flag.
///
/// `added` stays `None` until the tag has been read from, or stamped for, the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub added: Option<NaiveDateTime>,
    pub authorized: bool,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_added(mut self, added: NaiveDateTime) -> Self {
        self.added = Some(added);
        self
    }

    pub fn with_authorized(mut self, authorized: bool) -> Self {
        self.authorized = authorized;
        self
    }

    /// Whether the creation time is known
    pub fn is_stored(&self) -> bool {
        self.added.is_some()
    }
}

/// Render a timestamp the way the `added` column stores it
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored or user supplied timestamp, truncated to whole seconds.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, the `T`-separated form, RFC 3339 (converted
/// to UTC), and a bare date (midnight).
pub fn parse_timestamp(value: &str) -> StorageResult<NaiveDateTime> {
    let value = value.trim();

    let parsed = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.naive_utc()))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| StorageError::InvalidTimestamp(value.to_string()))?;

    Ok(parsed.with_nanosecond(0).unwrap_or(parsed))
}
