// ABOUTME: Tag subcommands for the mentor-tags binary
// ABOUTME: Get, search, and save handlers printing tables or JSON

use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use mentor_tags::{format_timestamp, parse_timestamp, Tag, TagStore};
use tracing::debug;

#[derive(Subcommand, Debug, PartialEq)]
pub enum TagsCommands {
    /// Show a tag by name
    Get {
        /// Tag name
        name: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List tags whose name contains a term
    Search {
        /// Text to look for
        term: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a tag, or update the authorization of an existing one
    Save {
        /// Tag name
        name: String,
        /// Mark the tag as authorized
        #[arg(short, long)]
        authorized: bool,
        /// Creation time (YYYY-MM-DD HH:MM:SS); defaults to now
        #[arg(long)]
        added: Option<String>,
    },
}

pub async fn handle_tags_command(
    store: &TagStore,
    command: TagsCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        TagsCommands::Get { name, json } => get_tag(store, name, json).await,
        TagsCommands::Search { term, json } => search_tags(store, &term, json).await,
        TagsCommands::Save {
            name,
            authorized,
            added,
        } => save_tag(store, name, authorized, added.as_deref()).await,
    }
}

async fn get_tag(
    store: &TagStore,
    name: String,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(tag) = store.find(&name).await? else {
        return Err(format!("Tag '{}' not found", name).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tag)?);
        return Ok(());
    }

    println!("{}", format!("🏷  {}", tag.name).blue().bold());
    println!("Authorized: {}", authorized_label(&tag));
    println!("Added:      {}", added_label(&tag));

    Ok(())
}

async fn search_tags(
    store: &TagStore,
    term: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tags = store.search_by_term(term).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("{}", format!("No tags containing '{}'", term).yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["Name", "Authorized", "Added"]);
    for tag in &tags {
        table.add_row(tag_row(tag));
    }

    println!("{}", table);
    println!("Total: {} tags", tags.len().to_string().cyan());

    Ok(())
}

async fn save_tag(
    store: &TagStore,
    name: String,
    authorized: bool,
    added: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tag = Tag::new(name).with_authorized(authorized);
    if let Some(added) = added {
        tag = tag.with_added(parse_timestamp(added)?);
    }

    debug!("Saving tag from command line: {:?}", tag);
    store.save(&tag).await?;

    println!(
        "{} {} ({})",
        "✓ Saved".green().bold(),
        tag.name,
        authorized_label(&tag)
    );

    Ok(())
}

fn authorized_label(tag: &Tag) -> &'static str {
    if tag.authorized {
        "authorized"
    } else {
        "unauthorized"
    }
}

fn added_label(tag: &Tag) -> String {
    tag.added
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "—".to_string())
}

fn tag_row(tag: &Tag) -> Vec<String> {
    vec![
        tag.name.clone(),
        if tag.authorized { "yes" } else { "no" }.to_string(),
        added_label(tag),
    ]
}
