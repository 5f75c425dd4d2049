//! Names of the book fields checked during validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A book field, in the order validation visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookField {
    Title,
    Author,
    PublicationDate,
    NumberOfPages,
}

impl BookField {
    /// Returns the field name used in error messages and payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::PublicationDate => "publication_date",
            Self::NumberOfPages => "number_of_pages",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
