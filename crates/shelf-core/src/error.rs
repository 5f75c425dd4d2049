//! Error types for the shelf library.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::{config::ConfigErrors, models::BookField};

/// Every failure a shelf operation can report.
///
/// Each variant maps onto one category of the store's error taxonomy, and
/// every error can be rendered as an `{"error": ...}` payload with
/// [`ShelfError::to_payload`].
#[derive(Error, Debug)]
pub enum ShelfError {
    /// Config file or bootstrap script could not be read
    #[error("File system error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The linked SQLite library is missing features the store needs
    #[error("SQLite driver unavailable: linked version {found}, need at least {required}")]
    DriverUnavailable { found: String, required: String },
    /// Missing or empty configuration keys, all of them at once
    #[error("Configuration error: {0}")]
    Config(ConfigErrors),
    /// The database could not be opened
    #[error("DB connection error: {message}")]
    Connection { message: String },
    /// Input rejected before touching the database
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: BookField, reason: String },
    /// The query ran but matched nothing
    #[error("{what}")]
    NotFound { what: String },
    /// A statement failed to prepare or execute
    #[error("Query error: {message}: {source}")]
    Query {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// One or more statements of a multi-statement script failed
    #[error("{} statement(s) failed: {}", .errors.len(), .errors.join("; "))]
    QueryBatch { errors: Vec<String> },
}

/// Builder for validation errors, one per offending field.
pub struct ValidationErrorBuilder {
    field: BookField,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: BookField) -> Self {
        Self { field }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ShelfError {
        ShelfError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ShelfError {
    /// Creates a builder for validation errors.
    pub fn invalid(field: BookField) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Wraps an I/O failure with the path it happened at.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a query error carrying the driver diagnostic.
    pub fn query_error(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Query {
            message: message.into(),
            source,
        }
    }

    /// Returns true when the error means "no matching rows".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Renders the error in the `{"error": ...}` shape callers integrate
    /// against.
    ///
    /// Configuration errors become a mapping of key to message, statement
    /// batches a list of messages, everything else a single string.
    pub fn to_payload(&self) -> Value {
        let error = match self {
            Self::Config(errors) => Value::Object(
                errors
                    .iter()
                    .map(|issue| {
                        let key = issue.key().as_str().to_string();
                        (key, Value::String(issue.to_string()))
                    })
                    .collect::<Map<String, Value>>(),
            ),
            Self::QueryBatch { errors } => json!(errors),
            other => Value::String(other.to_string()),
        };
        json!({ "error": error })
    }
}

/// Specialized extension trait for database-related Results.
pub trait QueryResultExt<T> {
    /// Map driver errors into [`ShelfError::Query`] with a message.
    fn query_context(self, message: &str) -> Result<T>;
}

impl<T> QueryResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn query_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ShelfError::query_error(message, e))
    }
}

/// Result type alias for shelf operations
pub type Result<T> = std::result::Result<T, ShelfError>;
