//! Book queries: lookup by id, full listing and insert.

use jiff::civil::Date;
use log::debug;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{QueryResultExt, Result, ShelfError},
    models::{Book, NewBook},
};

const SELECT_BOOKS_SQL: &str =
    "SELECT id, title, author, publication_date, number_pages FROM book";
const SELECT_BOOK_SQL: &str =
    "SELECT id, title, author, publication_date, number_pages FROM book WHERE id = ?1";
const INSERT_BOOK_SQL: &str =
    "INSERT INTO book (title, author, publication_date, number_pages) VALUES (?1, ?2, ?3, ?4)";

impl super::Database {
    /// Retrieves the book with the given id.
    ///
    /// # Errors
    ///
    /// `ShelfError::NotFound` when no row matches, `ShelfError::Query` when
    /// the statement fails to prepare or run.
    pub fn get_book(&self, id: i64) -> Result<Book> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BOOK_SQL)
            .query_context("Prepared statement error")?;

        let book = stmt
            .query_row(params![id], book_from_row)
            .optional()
            .query_context("Failed to query book")?;

        book.ok_or_else(|| ShelfError::NotFound {
            what: format!("No book with ID {id} in database"),
        })
    }

    /// Lists every book in storage order.
    ///
    /// There is no `ORDER BY`; rows come back in whatever order SQLite
    /// scans the table, which in practice is insertion order but is not
    /// guaranteed.
    pub fn list_books(&self) -> Result<Vec<Book>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_BOOKS_SQL)
            .query_context("Prepared statement error")?;

        let books = stmt
            .query_map([], book_from_row)
            .query_context("Failed to query books")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .query_context("Failed to read book row")?;

        if books.is_empty() {
            return Err(ShelfError::NotFound {
                what: "No books in database".to_string(),
            });
        }

        debug!("Loaded {} book(s)", books.len());
        Ok(books)
    }

    /// Inserts a validated book and returns the id the store assigned.
    pub fn insert_book(&self, book: &NewBook) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare(INSERT_BOOK_SQL)
            .query_context("Prepared statement error")?;

        stmt.execute(params![
            book.title,
            book.author,
            book.publication_date.to_string(),
            book.number_of_pages,
        ])
        .query_context("Failed to insert book")?;

        let rowid = self.connection.last_insert_rowid();
        let id = u64::try_from(rowid)
            .map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, rowid))
            .query_context("Store assigned a negative book id")?;
        debug!("Inserted book {id}");
        Ok(id)
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    let publication_date = row
        .get::<_, String>(3)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let id = row.get::<_, i64>(0)?;
    let id = u64::try_from(id).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, id))?;

    Ok(Book {
        id,
        title: row.get(1)?,
        author: row.get(2)?,
        publication_date,
        number_of_pages: row.get(4)?,
    })
}
