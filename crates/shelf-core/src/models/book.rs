//! Book model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A persisted book record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Identifier assigned by the store on insert
    pub id: u64,

    /// Title, markup-escaped and trimmed on the way in
    pub title: String,

    /// Author, markup-escaped and trimmed on the way in
    pub author: String,

    /// Publication day, stored as `YYYY-MM-DD`
    pub publication_date: Date,

    /// Page count, always positive
    pub number_of_pages: u32,
}

/// A book that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_date: Date,
    pub number_of_pages: u32,
}
