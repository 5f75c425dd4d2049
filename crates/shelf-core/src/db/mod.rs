//! Database connections and SQLite access for book records.
//!
//! A [`Database`] is one open connection. The connection factory
//! ([`Database::connect`]) reloads the config file on every call and opens a
//! fresh handle, so nothing is pooled or shared between operations. The
//! handle is released exactly once: explicitly through [`Database::close`], or
//! on drop along every other exit path.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rusqlite::{functions::FunctionFlags, Connection, OpenFlags};

use crate::{
    config::{Config, ConfigIssue, ConfigKey},
    error::{Result, ShelfError},
};

pub mod book_queries;
pub mod bootstrap;

/// Oldest SQLite library the store works with (`3.24.0`).
pub const MIN_SQLITE_VERSION: i32 = 3_024_000;

/// File extension of database files inside the data directory.
pub const DATABASE_EXTENSION: &str = "db";

/// An open connection, with or without a selected database.
#[derive(Debug)]
pub struct Database {
    connection: Connection,
    target: String,
}

/// Fails with `ShelfError::DriverUnavailable` when the linked SQLite library
/// is older than [`MIN_SQLITE_VERSION`].
pub fn ensure_driver_available() -> Result<()> {
    let found = rusqlite::version_number();
    if found < MIN_SQLITE_VERSION {
        return Err(ShelfError::DriverUnavailable {
            found: rusqlite::version().to_string(),
            required: "3.24.0".to_string(),
        });
    }
    Ok(())
}

/// Path of the database file selected by `config`, if it names one.
pub fn database_file(config: &Config) -> Option<PathBuf> {
    config
        .name
        .as_deref()
        .map(|name| Path::new(&config.host).join(format!("{name}.{DATABASE_EXTENSION}")))
}

/// Registers `data_dir()` on a bootstrap session.
///
/// SQLite resolves relative `ATTACH` targets against the process working
/// directory, so bootstrap scripts build the database path from this
/// function instead: `ATTACH DATABASE data_dir() || '/library.db' AS library`.
fn register_data_dir(connection: &Connection, host: &Path) -> Result<()> {
    let data_dir = host
        .canonicalize()
        .map_err(|e| ShelfError::Connection {
            message: format!("cannot resolve data directory '{}': {e}", host.display()),
        })?
        .to_string_lossy()
        .into_owned();

    connection
        .create_scalar_function(
            "data_dir",
            0,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            move |_| Ok(data_dir.clone()),
        )
        .map_err(|e| ShelfError::Connection {
            message: format!("cannot register data_dir() on '{}': {e}", host.display()),
        })
}

impl Database {
    /// Loads the config at `config_path` and opens a connection with it.
    ///
    /// With `with_database = false` the config may omit `db_name` and the
    /// connection has no database selected, which is what the bootstrap
    /// script needs before the database exists.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::DriverUnavailable`, any config error unchanged,
    /// or `ShelfError::Connection` with the driver message.
    pub fn connect(config_path: impl AsRef<Path>, with_database: bool) -> Result<Self> {
        ensure_driver_available()?;
        let config = Config::load(config_path, with_database)?;
        Self::open(&config, with_database)
    }

    /// Opens a connection from already validated settings.
    pub fn open(config: &Config, with_database: bool) -> Result<Self> {
        let host = Path::new(&config.host);
        if !host.is_dir() {
            return Err(ShelfError::Connection {
                message: format!("unknown host '{}': no such data directory", config.host),
            });
        }

        let (connection, target) = if with_database {
            let path = database_file(config).ok_or_else(|| {
                ShelfError::Config(vec![ConfigIssue::MissingKey(ConfigKey::DbName)].into())
            })?;
            let target = path.display().to_string();
            // No SQLITE_OPEN_CREATE: a database that was never bootstrapped is
            // a connection failure, not a fresh empty file.
            let connection = Connection::open_with_flags(
                &path,
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| ShelfError::Connection {
                message: format!("cannot open database '{target}': {e}"),
            })?;
            (connection, target)
        } else {
            let connection = Connection::open_in_memory().map_err(|e| ShelfError::Connection {
                message: format!("cannot open session on '{}': {e}", config.host),
            })?;
            register_data_dir(&connection, host)?;
            (connection, format!("{} (no database)", config.host))
        };

        info!("Connected to {target} as {}", config.user);
        Ok(Self { connection, target })
    }

    /// Human-readable description of what this connection points at.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Closes the connection, reporting any error the driver raises.
    pub fn close(self) -> Result<()> {
        let Self { connection, target } = self;
        connection.close().map_err(|(_, e)| ShelfError::Connection {
            message: format!("failed to close '{target}': {e}"),
        })?;
        debug!("Closed connection to {target}");
        Ok(())
    }
}
