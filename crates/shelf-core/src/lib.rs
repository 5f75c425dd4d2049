//! Core library for the shelf book store.
//!
//! Books live in a SQLite database addressed by an INI config file
//! (`db_host`, `db_user`, `db_password`, `db_name`). Each operation loads the
//! config, opens its own connection, runs one prepared statement and closes
//! the connection again; nothing is pooled or cached.
//!
//! Failures are values: every operation returns [`Result`], and any
//! [`ShelfError`] can be turned into the `{"error": ...}` payload shape with
//! [`ShelfError::to_payload`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shelf_core::LibraryBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = LibraryBuilder::new()
//!     .with_config_path(Some("config.ini"))
//!     .with_script_path(Some("create_db.sql"))
//!     .build();
//!
//! // Create the database and seed rows
//! library.populate_database()?;
//!
//! let id = library.create_new_book("Solaris", "Stanislaw Lem", -270_000_000, 204)?;
//! for book in library.get_all_books()? {
//!     println!("{}: {}", book.id, book.title);
//! }
//! # let _ = id;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod library;
pub mod models;
pub mod params;
pub mod sanitize;

// Re-export commonly used types
pub use config::{Config, ConfigErrors, ConfigIssue, ConfigKey};
pub use db::Database;
pub use display::{Books, OperationStatus};
pub use error::{Result, ShelfError};
pub use library::{Library, LibraryBuilder};
pub use models::{Book, BookField, NewBook};
pub use params::{BookId, CreateBook};
