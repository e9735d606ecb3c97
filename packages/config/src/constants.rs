// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Mentor

// Database Configuration
pub const MENTOR_DATABASE_PATH: &str = "MENTOR_DATABASE_PATH";
pub const MENTOR_DB_MAX_CONNECTIONS: &str = "MENTOR_DB_MAX_CONNECTIONS";
pub const MENTOR_DB_BUSY_TIMEOUT_SECS: &str = "MENTOR_DB_BUSY_TIMEOUT_SECS";
pub const MENTOR_DB_ENABLE_WAL: &str = "MENTOR_DB_ENABLE_WAL";

// Tag Storage
pub const MENTOR_TAG_TABLE: &str = "MENTOR_TAG_TABLE";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
