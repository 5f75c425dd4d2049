//! Connection settings loaded from an INI-style `key = value` file.
//!
//! The settings are never cached: every connection attempt calls
//! [`Config::load`] again, so edits to the file take effect on the next
//! operation.

use std::{
    collections::HashMap,
    fmt, fs, io,
    path::{Path, PathBuf},
    slice,
};

use log::debug;

use crate::error::{Result, ShelfError};

/// File name looked up in the working directory and the XDG config dir.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// Keys understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    DbHost,
    DbUser,
    DbPassword,
    DbName,
}

impl ConfigKey {
    /// Returns the key as written in the config file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DbHost => "db_host",
            Self::DbUser => "db_user",
            Self::DbPassword => "db_password",
            Self::DbName => "db_name",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem with a required key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    MissingKey(ConfigKey),
    EmptyValue(ConfigKey),
}

impl ConfigIssue {
    /// The key this issue is about.
    pub fn key(&self) -> ConfigKey {
        match self {
            Self::MissingKey(key) | Self::EmptyValue(key) => *key,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey(key) => write!(f, "missing parameter {key}"),
            Self::EmptyValue(key) => write!(f, "{key} is empty"),
        }
    }
}

/// Every issue found in one pass over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigErrors(Vec<ConfigIssue>);

impl ConfigErrors {
    /// Check if no issues were recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the recorded issues in check order.
    pub fn iter(&self) -> slice::Iter<'_, ConfigIssue> {
        self.0.iter()
    }

    fn push(&mut self, issue: ConfigIssue) {
        self.0.push(issue);
    }
}

impl From<Vec<ConfigIssue>> for ConfigErrors {
    fn from(issues: Vec<ConfigIssue>) -> Self {
        Self(issues)
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// Validated connection settings.
///
/// `host` is the data directory holding the database files and `name` the
/// database inside it. `name` is only guaranteed present when the config was
/// loaded with `require_db_name = true`.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

impl Config {
    /// Reads and validates the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Io` if the file cannot be read or a line is not
    /// valid `key = value` syntax, and `ShelfError::Config` listing every
    /// missing or blank required key.
    pub fn load(path: impl AsRef<Path>, require_db_name: bool) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {} (require_db_name={require_db_name})", path.display());

        let text = fs::read_to_string(path).map_err(|e| ShelfError::io(path, e))?;
        let entries = parse_entries(&text).map_err(|e| ShelfError::io(path, e))?;

        Self::from_entries(&entries, require_db_name)
    }

    /// Validates already-parsed entries.
    ///
    /// All required keys are checked before returning, so the error lists
    /// every problem at once.
    pub fn from_entries(entries: &HashMap<String, String>, require_db_name: bool) -> Result<Self> {
        let mut issues = ConfigErrors::default();

        let host = required(entries, ConfigKey::DbHost, &mut issues);
        let user = required(entries, ConfigKey::DbUser, &mut issues);
        let password = required(entries, ConfigKey::DbPassword, &mut issues);
        let name = if require_db_name {
            required(entries, ConfigKey::DbName, &mut issues)
        } else {
            entries
                .get(ConfigKey::DbName.as_str())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        match (host, user, password) {
            (Some(host), Some(user), Some(password)) if issues.is_empty() => Ok(Self {
                host,
                user,
                password,
                name,
            }),
            _ => Err(ShelfError::Config(issues)),
        }
    }
}

fn required(
    entries: &HashMap<String, String>,
    key: ConfigKey,
    issues: &mut ConfigErrors,
) -> Option<String> {
    let Some(raw) = entries.get(key.as_str()) else {
        issues.push(ConfigIssue::MissingKey(key));
        return None;
    };

    let value = raw.trim();
    if value.is_empty() {
        issues.push(ConfigIssue::EmptyValue(key));
        return None;
    }
    Some(value.to_string())
}

/// Parses INI-style text into a flat key/value map.
///
/// Blank lines, `;`/`#` comments and `[section]` headers are skipped;
/// sections do not namespace keys. Values may be wrapped in matching quotes.
/// A later duplicate key wins.
pub fn parse_entries(text: &str) -> io::Result<HashMap<String, String>> {
    let mut entries = HashMap::new();

    for (index, line) in text.trim_start_matches('\u{feff}').lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }
        if line.starts_with('[') {
            if line.ends_with(']') {
                continue;
            }
            return Err(syntax_error(index, "unterminated section header"));
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| syntax_error(index, "expected `key = value`"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(syntax_error(index, "missing key before `=`"));
        }

        entries.insert(key.to_string(), unquote(value.trim()).to_string());
    }

    Ok(entries)
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    match bytes {
        [first, .., last] if first == last && (*first == b'"' || *first == b'\'') => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}

fn syntax_error(index: usize, reason: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("line {}: {reason}", index + 1),
    )
}

/// Returns `./config.ini` when present, otherwise the copy under
/// `$XDG_CONFIG_HOME/shelf/`, falling back to `./config.ini` so a missing file
/// is reported against the working directory.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return local;
    }

    xdg::BaseDirectories::with_prefix("shelf")
        .find_config_file(DEFAULT_CONFIG_FILE)
        .unwrap_or(local)
}
