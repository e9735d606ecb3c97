// ABOUTME: Entry point for the mentor-tags command-line tool
// ABOUTME: Loads configuration, opens the pool, and dispatches tag subcommands

use clap::Parser;
use colored::*;
use mentor_config::{MENTOR_TAG_TABLE, RUST_LOG};
use mentor_storage::{connect, StorageConfig, StorageError};
use mentor_tags::{TagStore, DEFAULT_TAG_TABLE};
use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod tags_cli;

use tags_cli::tags::{handle_tags_command, TagsCommands};

#[derive(Parser, Debug)]
#[command(name = "mentor-tags")]
#[command(about = "Look up, search, and authorize Mentor tags")]
#[command(version)]
struct Cli {
    /// SQLite database file (overrides MENTOR_DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Tag table name (overrides MENTOR_TAG_TABLE)
    #[arg(long, global = true)]
    table: Option<String>,

    #[command(subcommand)]
    command: TagsCommands,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(exit_code(e.as_ref()));
    }
}

/// Bad arguments exit with 2, every other failure with 1
fn exit_code(err: &(dyn Error + 'static)) -> i32 {
    match err.downcast_ref::<StorageError>() {
        Some(storage_err) if storage_err.is_invalid_input() => 2,
        _ => 1,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = StorageConfig::from_env()?;
    if let Some(path) = cli.database {
        config = config.with_database_path(path);
    }

    let table = resolve_table(cli.table, env::var(MENTOR_TAG_TABLE).ok());

    let pool = connect(&config).await?;
    let store = TagStore::with_table(pool.clone(), &table)?;

    let result = handle_tags_command(&store, cli.command).await;
    pool.close().await;
    result
}

/// Flag beats environment beats the default table
fn resolve_table(flag: Option<String>, from_env: Option<String>) -> String {
    flag.or(from_env.filter(|value| !value.is_empty()))
        .unwrap_or_else(|| DEFAULT_TAG_TABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_save_command() {
        let cli = Cli::try_parse_from([
            "mentor-tags",
            "--database",
            "/tmp/tags.db",
            "save",
            "rust",
            "--authorized",
            "--added",
            "2023-01-15 10:00:00",
        ])
        .unwrap();

        assert_eq!(cli.database, Some(PathBuf::from("/tmp/tags.db")));
        assert_eq!(
            cli.command,
            TagsCommands::Save {
                name: "rust".to_string(),
                authorized: true,
                added: Some("2023-01-15 10:00:00".to_string()),
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mentor-tags", "search", "go", "--table", "labels"]).unwrap();

        assert_eq!(cli.table, Some("labels".to_string()));
        assert_eq!(
            cli.command,
            TagsCommands::Search {
                term: "go".to_string(),
                json: false,
            }
        );
    }

    #[test]
    fn test_get_requires_name() {
        assert!(Cli::try_parse_from(["mentor-tags", "get"]).is_err());
    }

    #[test]
    fn test_exit_code_separates_invalid_input() {
        let invalid: Box<dyn Error> =
            Box::new(StorageError::InvalidInput("search term required".into()));
        assert_eq!(exit_code(invalid.as_ref()), 2);

        let store: Box<dyn Error> = Box::new(StorageError::Sqlx(sqlx::Error::RowNotFound));
        assert_eq!(exit_code(store.as_ref()), 1);

        let other: Box<dyn Error> = "Tag 'go' not found".into();
        assert_eq!(exit_code(other.as_ref()), 1);
    }

    #[test]
    fn test_resolve_table_precedence() {
        assert_eq!(resolve_table(None, None), "tag");
        assert_eq!(resolve_table(None, Some(String::new())), "tag");
        assert_eq!(resolve_table(None, Some("labels".into())), "labels");
        assert_eq!(
            resolve_table(Some("flag".into()), Some("labels".into())),
            "flag"
        );
    }
}
