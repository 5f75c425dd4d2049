//! Parameter structures for shelf operations.
//!
//! These carry raw caller input into the library without any framework
//! derives, so the CLI (or any other front end) converts its own argument
//! types into them.

use crate::{
    error::{Result, ShelfError},
    models::{BookField, NewBook},
    sanitize::{clean_text, date_from_timestamp},
};

/// Parameters for looking up a single book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookId {
    pub id: i64,
}

/// Unvalidated input for creating a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    /// Unix timestamp in seconds
    pub publication_date: i64,
    pub number_of_pages: i64,
}

impl CreateBook {
    /// Checks the fields in order (title, author, publication date, page
    /// count) and stops at the first one that is empty, reporting only that
    /// field. A zero timestamp or page count counts as empty.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<NewBook> {
        let title = clean_text(BookField::Title, &self.title)?;
        let author = clean_text(BookField::Author, &self.author)?;

        if self.publication_date == 0 {
            return Err(
                ShelfError::invalid(BookField::PublicationDate).with_reason("must not be empty")
            );
        }
        if self.number_of_pages == 0 {
            return Err(
                ShelfError::invalid(BookField::NumberOfPages).with_reason("must not be empty")
            );
        }
        let number_of_pages = u32::try_from(self.number_of_pages).map_err(|_| {
            ShelfError::invalid(BookField::NumberOfPages).with_reason(format!(
                "must be a positive integer, got {}",
                self.number_of_pages
            ))
        })?;

        let publication_date = date_from_timestamp(self.publication_date)?;

        Ok(NewBook {
            title,
            author,
            publication_date,
            number_of_pages,
        })
    }
}
