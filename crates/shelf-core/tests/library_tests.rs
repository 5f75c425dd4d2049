mod common;

use std::{env, fs};

use common::{create_empty_store, create_test_store, BOOK_TABLE_SQL};
use jiff::civil::date;
use shelf_core::{BookField, CreateBook, ShelfError};

const SHIPPED_SCRIPT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../create_db.sql");

// 2023-11-14T22:13:20Z
const TS: i64 = 1_700_000_000;

#[test]
fn test_create_then_get_round_trips() {
    let store = create_empty_store();

    let id = store
        .library
        .create_new_book("T", "A", TS, 10)
        .expect("Failed to create book");

    let book = store.library.get_by_id(id as i64).expect("Book should exist");
    assert_eq!(book.id, id);
    assert_eq!(book.title, "T");
    assert_eq!(book.author, "A");
    assert_eq!(book.number_of_pages, 10);
    assert_eq!(book.publication_date, date(2023, 11, 14));
}

#[test]
fn test_created_text_is_escaped_and_trimmed() {
    let store = create_empty_store();

    let id = store
        .library
        .create_book(&CreateBook {
            title: "  <i>Emphasis</i> ".to_string(),
            author: "O'Brien & Sons".to_string(),
            publication_date: TS,
            number_of_pages: 300,
        })
        .expect("Failed to create book");

    let book = store.library.get_by_id(id as i64).expect("Book should exist");
    assert_eq!(book.title, "&lt;i&gt;Emphasis&lt;/i&gt;");
    assert_eq!(book.author, "O&#039;Brien &amp; Sons");
}

#[test]
fn test_get_missing_id_is_not_found() {
    let store = create_empty_store();

    let err = store.library.get_by_id(42).unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
    assert!(err.to_string().contains("42"));
}

#[test]
fn test_get_all_on_empty_table_is_not_found() {
    let store = create_empty_store();

    let err = store.library.get_all_books().unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[test]
fn test_get_all_returns_every_book_in_storage_order() {
    let store = create_empty_store();

    let titles = ["First", "Second", "Third", "Fourth"];
    for (i, title) in titles.iter().enumerate() {
        store
            .library
            .create_new_book(title, "Author", TS + i as i64 * 86_400, 100 + i as i64)
            .expect("Failed to create book");
    }

    let books = store.library.get_all_books().expect("Failed to list books");
    assert_eq!(books.len(), titles.len());
    let listed: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(listed, titles);
    assert_eq!(books[3].publication_date, date(2023, 11, 17));
}

#[test]
fn test_invalid_book_is_not_inserted() {
    let store = create_empty_store();

    let err = store.library.create_new_book("", "A", TS, 10).unwrap_err();
    assert!(matches!(
        err,
        ShelfError::Validation {
            field: BookField::Title,
            ..
        }
    ));

    let err = store.library.create_new_book("T", "A", TS, 0).unwrap_err();
    assert!(matches!(
        err,
        ShelfError::Validation {
            field: BookField::NumberOfPages,
            ..
        }
    ));

    assert!(store.library.get_all_books().unwrap_err().is_not_found());
}

#[test]
fn test_operations_before_populate_fail_to_connect() {
    let store = create_test_store();

    let err = store.library.get_all_books().unwrap_err();
    assert!(matches!(err, ShelfError::Connection { .. }), "got {err:?}");
    assert!(!store.database_path().exists());
}

#[test]
fn test_populate_with_idempotent_script_runs_twice() {
    let store = create_test_store();
    store.write_script(&format!(
        "{BOOK_TABLE_SQL}
        INSERT OR IGNORE INTO library.book (id, title, author, publication_date, number_pages)
            VALUES (1, 'Seed One', 'Writer', '1999-01-01', 120);
        INSERT OR IGNORE INTO library.book (id, title, author, publication_date, number_pages)
            VALUES (2, 'Seed Two', 'Writer', '2001-05-06', 240);"
    ));

    store.library.populate_database().expect("first populate");
    store.library.populate_database().expect("second populate");

    let books = store.library.get_all_books().expect("seeded books");
    assert_eq!(books.len(), 2);
    assert_eq!(books[1].publication_date, date(2001, 5, 6));
}

#[test]
fn test_populate_twice_with_non_idempotent_script_aggregates_errors() {
    let store = create_test_store();
    store.write_script(
        "CREATE TABLE library.book (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            publication_date TEXT NOT NULL,
            number_pages INTEGER NOT NULL
        );
        INSERT INTO library.book (id, title, author, publication_date, number_pages)
            VALUES (1, 'Seed', 'Writer', '1999-01-01', 120);
        INSERT INTO library.book (id, title, author, publication_date, number_pages)
            VALUES (2, 'Seed Two', 'Writer', '2001-05-06', 240);",
    );

    store.library.populate_database().expect("first populate");

    let err = store.library.populate_database().unwrap_err();
    let ShelfError::QueryBatch { errors } = &err else {
        panic!("expected batch error, got {err:?}");
    };
    assert_eq!(errors.len(), 3, "every failing statement is reported: {errors:?}");
    assert!(errors[0].contains("already exists"));
    assert!(errors[1].contains("UNIQUE"));
    assert!(errors[2].contains("UNIQUE"));

    let payload = err.to_payload();
    assert_eq!(payload["error"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_populate_keeps_going_after_a_failed_statement() {
    let store = create_test_store();
    store.write_script(&format!(
        "{BOOK_TABLE_SQL}
        INSERT INTO library.missing_table VALUES (1);
        INSERT INTO library.book (title, author, publication_date, number_pages)
            VALUES ('After Failure', 'Writer', '2010-10-10', 99);"
    ));

    let err = store.library.populate_database().unwrap_err();
    let ShelfError::QueryBatch { errors } = err else {
        panic!("expected batch error");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("missing_table"));

    let books = store.library.get_all_books().expect("insert after failure ran");
    assert_eq!(books[0].title, "After Failure");
}

#[test]
fn test_shipped_script_creates_database_under_db_host() {
    let store = create_test_store();
    fs::copy(SHIPPED_SCRIPT, store.script_path()).expect("Failed to copy shipped script");

    // The database must land in db_host, not the working directory.
    let cwd = env::current_dir().expect("Failed to read working directory");
    assert_ne!(
        cwd.canonicalize().ok(),
        store.dir.path().canonicalize().ok()
    );
    let stray = cwd.join("library.db");
    let stray_existed = stray.exists();

    store.library.populate_database().expect("first populate");
    store.library.populate_database().expect("shipped script is idempotent");

    assert!(store.database_path().exists());
    assert_eq!(stray.exists(), stray_existed);

    let books = store.library.get_all_books().expect("seeded books");
    assert_eq!(books.len(), 3);
    assert_eq!(books[0].title, "The Master and Margarita");
    assert_eq!(books[2].publication_date, date(1961, 6, 1));

    let id = store
        .library
        .create_new_book("Hard to Be a God", "Strugatsky", TS, 240)
        .expect("Failed to create book");
    assert_eq!(id, 4);
}

#[test]
fn test_populate_against_missing_host_is_connection_error() {
    let store = create_test_store();
    fs::copy(SHIPPED_SCRIPT, store.script_path()).expect("Failed to copy shipped script");
    let missing = store.dir.path().join("gone");
    fs::write(
        store.dir.path().join("config.ini"),
        format!(
            "db_host = {}\ndb_user = u\ndb_password = p\ndb_name = library\n",
            missing.display()
        ),
    )
    .expect("Failed to write config");

    let err = store.library.populate_database().unwrap_err();
    assert!(matches!(err, ShelfError::Connection { .. }), "got {err:?}");
    assert!(!missing.exists());
}

#[test]
fn test_negative_stored_id_is_query_error() {
    let store = create_test_store();
    store.write_script(&format!(
        "{BOOK_TABLE_SQL}
        INSERT INTO library.book (id, title, author, publication_date, number_pages)
            VALUES (-5, 'Negative', 'Writer', '1999-01-01', 120);"
    ));
    store.library.populate_database().expect("populate");

    let err = store.library.get_by_id(-5).unwrap_err();
    assert!(matches!(err, ShelfError::Query { .. }), "got {err:?}");

    let err = store.library.get_all_books().unwrap_err();
    assert!(matches!(err, ShelfError::Query { .. }), "got {err:?}");
}
