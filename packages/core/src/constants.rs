use std::env;
use std::path::PathBuf;

/// File name of the default SQLite database inside the Mentor directory
pub const DATABASE_FILE_NAME: &str = "mentor.db";

/// Get the path to the Mentor directory (~/.mentor)
pub fn mentor_dir() -> PathBuf {
    // HOME wins over the platform lookup so tests can redirect it
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".mentor")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".mentor")
    }
}

/// Get the path to the default database file (~/.mentor/mentor.db)
pub fn database_file() -> PathBuf {
    mentor_dir().join(DATABASE_FILE_NAME)
}
