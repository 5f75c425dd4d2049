//! Display implementations for domain models.

use std::fmt;

use crate::models::Book;

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Author: {}", self.author)?;
        writeln!(f, "- Published: {}", self.publication_date)?;
        writeln!(f, "- Pages: {}", self.number_of_pages)?;
        Ok(())
    }
}

impl Book {
    /// One-line summary used inside lists.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}. **{}** by {} ({}, {} pages)",
            self.id, self.title, self.author, self.publication_date, self.number_of_pages
        )
    }
}
