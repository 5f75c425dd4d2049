//! Running multi-statement bootstrap scripts.

use log::{debug, warn};

use crate::error::{Result, ShelfError};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Code,
    Quoted(u8),
    LineComment,
    BlockComment,
}

/// Splits a script into its `;`-terminated statements.
///
/// Semicolons inside string literals, quoted identifiers (`"..."`,
/// `` `...` ``, `[...]`) and comments do not end a statement. Fragments that
/// hold only whitespace or comments are dropped. Trigger bodies, whose
/// `BEGIN ... END` blocks contain semicolons, are not supported.
pub fn split_statements(script: &str) -> Vec<&str> {
    let bytes = script.as_bytes();
    let mut statements = Vec::new();
    let mut state = Scan::Code;
    let mut start = 0;
    let mut has_code = false;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();
        match state {
            Scan::Code => match b {
                b'\'' | b'"' | b'`' => {
                    state = Scan::Quoted(b);
                    has_code = true;
                }
                b'[' => {
                    state = Scan::Quoted(b']');
                    has_code = true;
                }
                b'-' if next == Some(b'-') => {
                    state = Scan::LineComment;
                    i += 1;
                }
                b'/' if next == Some(b'*') => {
                    state = Scan::BlockComment;
                    i += 1;
                }
                b';' => {
                    if has_code {
                        statements.push(script[start..i].trim());
                    }
                    start = i + 1;
                    has_code = false;
                }
                _ if b.is_ascii_whitespace() => {}
                _ => has_code = true,
            },
            // A doubled quote closes and immediately reopens, which keeps
            // escaped quotes inside the literal.
            Scan::Quoted(close) if b == close => state = Scan::Code,
            Scan::Quoted(_) => {}
            Scan::LineComment if b == b'\n' => state = Scan::Code,
            Scan::LineComment => {}
            Scan::BlockComment if b == b'*' && next == Some(b'/') => {
                state = Scan::Code;
                i += 1;
            }
            Scan::BlockComment => {}
        }
        i += 1;
    }

    if has_code {
        statements.push(script[start..].trim());
    }
    statements
}

impl super::Database {
    /// Executes every statement of `script` in order.
    ///
    /// A failing statement does not stop the run: its message is collected
    /// and execution moves on to the next one.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::QueryBatch` with every collected message when at
    /// least one statement failed.
    pub fn run_script(&self, script: &str) -> Result<()> {
        let statements = split_statements(script);
        debug!("Running {} statement(s) on {}", statements.len(), self.target);

        let mut errors = Vec::new();
        for (index, statement) in statements.iter().enumerate() {
            if let Err(e) = self.connection.execute_batch(statement) {
                warn!("Statement {} failed: {e}", index + 1);
                errors.push(e.to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ShelfError::QueryBatch { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_script() {
        let script = "CREATE TABLE t (a INT);\nINSERT INTO t VALUES (1);\n";
        assert_eq!(
            split_statements(script),
            vec!["CREATE TABLE t (a INT)", "INSERT INTO t VALUES (1)"]
        );
    }

    #[test]
    fn test_split_keeps_trailing_statement_without_semicolon() {
        assert_eq!(split_statements("SELECT 1; SELECT 2"), vec!["SELECT 1", "SELECT 2"]);
    }

    #[test]
    fn test_split_ignores_semicolons_in_literals_and_comments() {
        let script = "-- setup; not a statement\n\
                      INSERT INTO t VALUES ('a;b', \"c;d\", [e;f]);\n\
                      /* block; comment */\n\
                      INSERT INTO t VALUES ('it''s; fine');";
        let statements = split_statements(script);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].ends_with("('a;b', \"c;d\", [e;f])"));
        assert!(statements[1].ends_with("('it''s; fine')"));
    }

    #[test]
    fn test_split_drops_empty_fragments() {
        assert!(split_statements(" ;; -- only a comment\n; /* x */").is_empty());
    }
}
