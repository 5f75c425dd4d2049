//! Display formatting for books and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and status messages get newtype wrappers so the same data can
//! be rendered as a detail view, a list, or a one-line confirmation. All
//! output is markdown, which the CLI renders through termimad.
//!
//! ```rust
//! use jiff::civil::date;
//! use shelf_core::{display::Books, models::Book};
//!
//! let books = Books(vec![Book {
//!     id: 1,
//!     title: "Dune".to_string(),
//!     author: "Frank Herbert".to_string(),
//!     publication_date: date(1965, 8, 1),
//!     number_of_pages: 412,
//! }]);
//! assert!(books.to_string().contains("Dune"));
//! ```

pub mod collections;
pub mod models;
pub mod status;

pub use collections::Books;
pub use status::OperationStatus;
