//! Collection wrapper types for displaying groups of books.

use std::fmt;

use crate::models::Book;

/// Newtype wrapper for displaying a list of books.
pub struct Books(pub Vec<Book>);

impl Books {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of books in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Book>> for Books {
    fn from(books: Vec<Book>) -> Self {
        Self(books)
    }
}

impl fmt::Display for Books {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No books found.");
        }

        writeln!(f, "# Books")?;
        writeln!(f)?;
        for book in &self.0 {
            book.fmt_summary(f)?;
        }
        Ok(())
    }
}
