//! High-level API over the book store.
//!
//! [`Library`] exposes the five operations callers integrate against:
//! connecting, fetching one book, fetching all books, creating a book and
//! populating the database from the bootstrap script. Every call reloads the
//! config and opens its own connection, which is closed before the call
//! returns.
//!
//! ```rust,no_run
//! use shelf_core::LibraryBuilder;
//!
//! # fn example() -> shelf_core::Result<()> {
//! let library = LibraryBuilder::new()
//!     .with_config_path(Some("config.ini"))
//!     .build();
//!
//! library.populate_database()?;
//! let id = library.create_new_book("Dune", "Frank Herbert", -141_868_800, 412)?;
//! let book = library.get_by_id(id as i64)?;
//! println!("{book}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::warn;

use crate::{db::Database, error::Result};

pub mod book_ops;
pub mod builder;


pub use builder::LibraryBuilder;

/// Entry point for book operations.
#[derive(Debug, Clone)]
pub struct Library {
    pub(crate) config_path: PathBuf,
    pub(crate) script_path: PathBuf,
}

impl Library {
    /// Creates a library reading settings from `config_path` and the
    /// bootstrap script from `script_path`.
    pub(crate) fn new(config_path: PathBuf, script_path: PathBuf) -> Self {
        Self {
            config_path,
            script_path,
        }
    }

    /// Config file this library reads on every connection.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Bootstrap script used by [`Library::populate_database`].
    pub fn script_path(&self) -> &PathBuf {
        &self.script_path
    }

    /// Opens a connection; the caller owns it and must close or drop it.
    pub fn connect(&self, with_database: bool) -> Result<Database> {
        Database::connect(&self.config_path, with_database)
    }

    /// Runs `op` on a fresh connection and releases it on every path.
    ///
    /// When `op` fails its error wins; a close failure is only logged then.
    fn with_connection<T>(
        &self,
        with_database: bool,
        op: impl FnOnce(&Database) -> Result<T>,
    ) -> Result<T> {
        let db = self.connect(with_database)?;
        match op(&db) {
            Ok(value) => {
                db.close()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(close_err) = db.close() {
                    warn!("{close_err}");
                }
                Err(e)
            }
        }
    }
}
