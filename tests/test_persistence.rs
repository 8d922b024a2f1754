//! Integration tests for the save/load round trip.

mod common;
use common::*;

use rolodex::domain::Address;
use rolodex::{AddressBook, FileStore, StorageError};
use std::fs;

fn full_book() -> AddressBook {
    init_logging();
    let mut book = AddressBook::new();

    let mut alice = record_with_birthday("Alice", "1990-01-01");
    alice.add_phone("123456789").unwrap();
    alice.add_phone("123456789").unwrap(); // duplicate on purpose
    alice.add_email("alice@example.com").unwrap();
    alice.set_address(Some(Address::new("1 Main St", "Springfield", "12345", "USA")));
    alice.add_note("first note");
    alice.add_note("second note");
    book.add_record(alice);

    let mut bob = record("Bob");
    bob.add_email("bob@example.com").unwrap();
    book.add_record(bob);

    book
}

#[test]
fn test_round_trip_reproduces_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("book.json"));

    let book = full_book();
    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, book);

    // Element-wise checks, including duplicate and note order.
    let alice = loaded.get("Alice").unwrap();
    let phones: Vec<&str> = alice.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["123456789", "123456789"]);
    assert_eq!(alice.notes(), &["first note".to_string(), "second note".to_string()]);
    assert_eq!(alice.birthday().unwrap().to_string(), "1990-01-01");
    assert_eq!(alice.address().unwrap().street, "1 Main St");
}

#[test]
fn test_round_trip_single_record_example() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("book.json"));

    let mut book = full_book();
    book.delete_record("Bob");
    store.save(&book).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    let alice = loaded.get("Alice").unwrap();
    assert_eq!(alice.phones()[0].as_str(), "123456789");
    assert_eq!(alice.birthday().unwrap().to_string(), "1990-01-01");
}

#[test]
fn test_load_missing_file_bootstraps_empty() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never_saved.json"));

    let book = store.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_load_corrupted_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "{ not json").unwrap();

    let result = FileStore::new(&path).load();
    assert!(matches!(result, Err(StorageError::Serde(_))));
}

#[test]
fn test_load_rejects_invalid_field_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    // Structurally valid JSON, but the phone fails re-validation.
    fs::write(
        &path,
        r#"{"version":1,"page_size":5,"records":[{"name":"Mallory","phones":["12"]}]}"#,
    )
    .unwrap();

    let result = FileStore::new(&path).load();
    assert!(matches!(result, Err(StorageError::Serde(_))));
}

#[test]
fn test_save_overwrites_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.json");
    let store = FileStore::new(&path);

    store.save(&full_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add_record(record("Only"));
    store.save(&smaller).unwrap();

    // No temp file left behind, and the file is valid JSON for the new state.
    assert!(!path.with_file_name("book.json.tmp").exists());
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.get("Only").is_some());
}

#[test]
fn test_page_size_survives_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("book.json"));

    let mut book = AddressBook::with_page_size(3);
    book.add_record(record("A"));
    store.save(&book).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.page_size(), 3);
}
