use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelf_core::CreateBook;

/// Command-line interface for the shelf book store
///
/// Shelf keeps book records (title, author, publication date, page count) in
/// a SQLite database described by an INI config file. Every command reloads
/// the config and opens its own connection.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Path to the config file. Defaults to ./config.ini, then
    /// $XDG_CONFIG_HOME/shelf/config.ini
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the bootstrap SQL script. Defaults to ./create_db.sql
    #[arg(long, global = true)]
    pub script: Option<PathBuf>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the shelf CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show a single book
    #[command(alias = "show")]
    Get(GetBookArgs),
    /// List every book
    #[command(aliases = ["l", "ls"])]
    List,
    /// Add a new book
    #[command(alias = "c")]
    Create(CreateBookArgs),
    /// Create the database and seed data from the bootstrap script
    Populate,
    /// Validate the config file without touching the database
    CheckConfig(CheckConfigArgs),
}

/// Show a single book
#[derive(clap::Args)]
pub struct GetBookArgs {
    /// ID of the book to display
    #[arg(help = "Identifier of the book to show", allow_negative_numbers = true)]
    pub id: i64,
}

/// Add a new book
///
/// Text fields are markup-escaped and trimmed before they are stored; the
/// first empty field is reported and nothing is inserted.
#[derive(clap::Args)]
pub struct CreateBookArgs {
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publication date as a Unix timestamp in seconds
    #[arg(allow_negative_numbers = true)]
    pub publication_date: i64,
    /// Number of pages
    #[arg(allow_negative_numbers = true)]
    pub pages: i64,
}

impl From<CreateBookArgs> for CreateBook {
    fn from(val: CreateBookArgs) -> Self {
        CreateBook {
            title: val.title,
            author: val.author,
            publication_date: val.publication_date,
            number_of_pages: val.pages,
        }
    }
}

/// Validate the config file
#[derive(clap::Args)]
pub struct CheckConfigArgs {
    /// Check the keys needed for bootstrapping only (db_name optional)
    #[arg(long)]
    pub bootstrap: bool,
}
