//! Data models for book records.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the structs here stay plain data.

pub mod book;
pub mod field;

pub use book::{Book, NewBook};
pub use field::BookField;
