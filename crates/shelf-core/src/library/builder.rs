//! Builder for creating and configuring Library instances.

use std::path::{Path, PathBuf};

use super::Library;
use crate::config::default_config_path;

/// Bootstrap script looked up in the working directory by default.
pub const DEFAULT_SCRIPT_FILE: &str = "create_db.sql";

/// Builder for creating and configuring Library instances.
#[derive(Debug, Clone, Default)]
pub struct LibraryBuilder {
    config_path: Option<PathBuf>,
    script_path: Option<PathBuf>,
}

impl LibraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom config file path.
    ///
    /// If not specified, uses `./config.ini`, then
    /// `$XDG_CONFIG_HOME/shelf/config.ini`.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom bootstrap script path. Defaults to `./create_db.sql`.
    pub fn with_script_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.script_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured library. Nothing is read until an operation
    /// runs.
    pub fn build(self) -> Library {
        let config_path = self.config_path.unwrap_or_else(default_config_path);
        let script_path = self
            .script_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT_FILE));
        Library::new(config_path, script_path)
    }
}
