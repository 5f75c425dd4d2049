#![allow(dead_code)]

use std::{fs, path::PathBuf};

use shelf_core::{Library, LibraryBuilder};
use tempfile::TempDir;

pub const ATTACH_LIBRARY_SQL: &str = "ATTACH DATABASE data_dir() || '/library.db' AS library;";

pub const BOOK_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS library.book (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    publication_date TEXT NOT NULL,
    number_pages INTEGER NOT NULL
);";

/// A throwaway data directory with a config file pointing into it.
pub struct TestStore {
    pub dir: TempDir,
    pub library: Library,
}

impl TestStore {
    pub fn database_path(&self) -> PathBuf {
        self.dir.path().join("library.db")
    }

    pub fn script_path(&self) -> PathBuf {
        self.dir.path().join("create_db.sql")
    }

    /// Writes a bootstrap script that attaches `<db_host>/library.db` first
    pub fn write_script(&self, body: &str) {
        let script = format!("{ATTACH_LIBRARY_SQL}\n{body}\n");
        fs::write(self.script_path(), script).expect("Failed to write script");
    }
}

/// Helper function to create a store whose database does not exist yet
pub fn create_test_store() -> TestStore {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = dir.path().join("config.ini");
    fs::write(
        &config_path,
        format!(
            "[database]\ndb_host = {}\ndb_user = tester\ndb_password = secret\ndb_name = library\n",
            dir.path().display()
        ),
    )
    .expect("Failed to write config");

    let library = LibraryBuilder::new()
        .with_config_path(Some(&config_path))
        .with_script_path(Some(dir.path().join("create_db.sql")))
        .build();

    TestStore { dir, library }
}

/// Helper function to create a store with an empty `book` table
pub fn create_empty_store() -> TestStore {
    let store = create_test_store();
    store.write_script(BOOK_TABLE_SQL);
    store
        .library
        .populate_database()
        .expect("Failed to create schema");
    store
}
