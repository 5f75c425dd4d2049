//! Command handlers for the shelf CLI.
//!
//! Each handler calls one [`Library`] operation and renders the outcome,
//! either as markdown through the [`TerminalRenderer`] or, with `--json`, as
//! JSON on stdout. In JSON mode failures are printed as the library's
//! `{"error": ...}` payload before being returned, so the exit status is
//! non-zero in both modes.

use anyhow::Result;
use log::debug;
use serde_json::{json, Value};
use shelf_core::{Book, Books, Config, CreateBook, Library, OperationStatus};

use crate::{
    args::{CheckConfigArgs, Commands, CreateBookArgs, GetBookArgs},
    renderer::TerminalRenderer,
};

/// Result of a successful command.
enum Output {
    Book(Book),
    Books(Books),
    Created(u64),
    Populated(String),
    ConfigOk(Config),
}

impl Output {
    fn to_markdown(&self) -> String {
        match self {
            Self::Book(book) => book.to_string(),
            Self::Books(books) => books.to_string(),
            Self::Created(id) => {
                OperationStatus::success(format!("Created book with ID: {id}")).to_string()
            }
            Self::Populated(script) => {
                OperationStatus::success(format!("Database populated from {script}")).to_string()
            }
            Self::ConfigOk(config) => OperationStatus::success(format!(
                "Config OK: host {}, user {}, database {}",
                config.host,
                config.user,
                config.name.as_deref().unwrap_or("(none)")
            ))
            .to_string(),
        }
    }

    fn to_json(&self) -> serde_json::Result<Value> {
        Ok(match self {
            Self::Book(book) => serde_json::to_value(book)?,
            Self::Books(books) => serde_json::to_value(&books.0)?,
            Self::Created(id) => json!({ "id": id }),
            Self::Populated(_) => json!(true),
            // The password is never echoed back.
            Self::ConfigOk(config) => json!({
                "db_host": config.host,
                "db_user": config.user,
                "db_name": config.name,
            }),
        })
    }
}

pub struct Cli {
    library: Library,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(library: Library, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            library,
            renderer,
            json,
        }
    }

    /// Dispatches one command and reports its outcome.
    pub fn run(&self, command: Commands) -> Result<()> {
        let outcome = match command {
            Commands::Get(args) => self.get_book(&args),
            Commands::List => self.list_books(),
            Commands::Create(args) => self.create_book(args),
            Commands::Populate => self.populate(),
            Commands::CheckConfig(args) => self.check_config(&args),
        };
        self.report(outcome)
    }

    fn report(&self, outcome: shelf_core::Result<Output>) -> Result<()> {
        match outcome {
            Ok(output) if self.json => {
                println!("{}", serde_json::to_string_pretty(&output.to_json()?)?);
                Ok(())
            }
            Ok(output) => {
                self.renderer.render(&output.to_markdown());
                Ok(())
            }
            Err(e) => {
                debug!("Command failed: {e:?}");
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&e.to_payload())?);
                }
                Err(e.into())
            }
        }
    }

    fn get_book(&self, args: &GetBookArgs) -> shelf_core::Result<Output> {
        self.library.get_by_id(args.id).map(Output::Book)
    }

    fn list_books(&self) -> shelf_core::Result<Output> {
        let books = self.library.get_all_books()?;
        Ok(Output::Books(Books(books)))
    }

    fn create_book(&self, args: CreateBookArgs) -> shelf_core::Result<Output> {
        self.library
            .create_book(&CreateBook::from(args))
            .map(Output::Created)
    }

    fn populate(&self) -> shelf_core::Result<Output> {
        self.library.populate_database()?;
        Ok(Output::Populated(
            self.library.script_path().display().to_string(),
        ))
    }

    fn check_config(&self, args: &CheckConfigArgs) -> shelf_core::Result<Output> {
        self.library
            .check_config(!args.bootstrap)
            .map(Output::ConfigOk)
    }
}
