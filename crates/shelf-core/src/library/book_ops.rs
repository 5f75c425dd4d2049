//! Book operations for the Library.

use std::{fs, io};

use log::info;

use super::Library;
use crate::{
    config::Config,
    db::ensure_driver_available,
    error::{Result, ShelfError},
    models::Book,
    params::{BookId, CreateBook},
};

impl Library {
    /// Retrieves a book by its id.
    pub fn get_by_id(&self, id: i64) -> Result<Book> {
        self.get_book(&BookId { id })
    }

    /// Retrieves the book named by `params`.
    pub fn get_book(&self, params: &BookId) -> Result<Book> {
        self.with_connection(true, |db| db.get_book(params.id))
    }

    /// Lists every stored book. An empty table is `ShelfError::NotFound`.
    pub fn get_all_books(&self) -> Result<Vec<Book>> {
        self.with_connection(true, |db| db.list_books())
    }

    /// Validates and inserts a book, returning its new id.
    ///
    /// `publication_date` is a Unix timestamp in seconds; only its UTC day is
    /// stored.
    pub fn create_new_book(
        &self,
        title: &str,
        author: &str,
        publication_date: i64,
        number_pages: i64,
    ) -> Result<u64> {
        self.create_book(&CreateBook {
            title: title.to_string(),
            author: author.to_string(),
            publication_date,
            number_of_pages: number_pages,
        })
    }

    /// Validates and inserts a book from parameters.
    ///
    /// Validation runs before any connection is opened, so rejected input
    /// never touches the database.
    pub fn create_book(&self, params: &CreateBook) -> Result<u64> {
        let book = params.validate()?;
        let id = self.with_connection(true, |db| db.insert_book(&book))?;
        info!("Created book {id}: {}", book.title);
        Ok(id)
    }

    /// Creates the database and seed data by running the bootstrap script.
    ///
    /// The connection is opened without a database selected. Every statement
    /// is attempted; failures are collected into a single
    /// `ShelfError::QueryBatch`.
    pub fn populate_database(&self) -> Result<()> {
        self.with_connection(false, |db| {
            let script = fs::read_to_string(&self.script_path)
                .map_err(|e| ShelfError::io(&self.script_path, e))?;
            if script.trim().is_empty() {
                return Err(ShelfError::io(
                    &self.script_path,
                    io::Error::new(io::ErrorKind::UnexpectedEof, "bootstrap script is empty"),
                ));
            }

            db.run_script(&script)?;
            info!("Populated database from {}", self.script_path.display());
            Ok(())
        })
    }

    /// Loads and validates the config without opening a connection.
    pub fn check_config(&self, with_database: bool) -> Result<Config> {
        ensure_driver_available()?;
        Config::load(&self.config_path, with_database)
    }
}
