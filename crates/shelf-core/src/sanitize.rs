//! Input clean-up applied before a book is written.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::{
    error::{Result, ShelfError},
    models::BookField,
};

/// Replaces the characters that are significant in HTML with entities.
///
/// Stored values may later be rendered as markup, so `&`, `<`, `>`, `"` and
/// `'` never reach the table unescaped.
pub fn escape_markup(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes then trims a text field, rejecting it when nothing is left.
pub fn clean_text(field: BookField, input: &str) -> Result<String> {
    let escaped = escape_markup(input);
    let trimmed = escaped.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    if trimmed.is_empty() {
        return Err(ShelfError::invalid(field).with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Converts a Unix timestamp (seconds) to the UTC calendar day it falls on.
pub fn date_from_timestamp(seconds: i64) -> Result<Date> {
    let timestamp = Timestamp::from_second(seconds).map_err(|e| {
        ShelfError::invalid(BookField::PublicationDate)
            .with_reason(format!("cannot convert timestamp {seconds} to a date: {e}"))
    })?;
    Ok(timestamp.to_zoned(TimeZone::UTC).date())
}
