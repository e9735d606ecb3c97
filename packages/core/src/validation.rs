// ABOUTME: Input validation shared across Mentor packages
// ABOUTME: Required-value checks and SQL identifier validation

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required value was empty; carries the caller-facing message
    #[error("{0}")]
    EmptyValue(&'static str),

    #[error("Invalid identifier: '{0}'. Must start with a letter or underscore and contain only letters, digits, or underscores")]
    InvalidIdentifier(String),
}

/// Reject an empty value with the given message.
///
/// Whitespace is content: only the empty string fails.
pub fn require_non_empty(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(message));
    }
    Ok(())
}

/// Validate a SQL identifier such as a table name.
///
/// Identifiers cannot be bound as query parameters, so anything interpolated
/// into a statement must pass this check first.
pub fn validate_identifier(value: &str) -> Result<(), ValidationError> {
    if IDENTIFIER.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIdentifier(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("golang", "tag must have a name").is_ok());
        assert!(require_non_empty(" ", "tag must have a name").is_ok());

        let err = require_non_empty("", "tag must have a name").unwrap_err();
        assert_eq!(err, ValidationError::EmptyValue("tag must have a name"));
        assert_eq!(err.to_string(), "tag must have a name");
    }

    #[test]
    fn test_validate_identifier_accepts_plain_names() {
        for name in ["tag", "Tag", "_tags", "mentor_tag_2"] {
            assert!(validate_identifier(name).is_ok(), "rejected {}", name);
        }
    }

    #[test]
    fn test_validate_identifier_rejects_injection_attempts() {
        for name in [
            "",
            "2tags",
            "tag; DROP TABLE tag; --",
            "tag name",
            "\"tag\"",
            "tag.name",
        ] {
            assert!(
                matches!(
                    validate_identifier(name),
                    Err(ValidationError::InvalidIdentifier(_))
                ),
                "accepted {}",
                name
            );
        }
    }
}
