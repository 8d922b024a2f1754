//! Rolodex - a validated contact-record store.
//!
//! This library provides a personal address book: typed, validated
//! contact fields, a `Record` aggregate, an `AddressBook` container with
//! substring search, fixed-size pagination and birthday-proximity
//! queries, and an atomic JSON persistence adapter. It is the core a
//! command layer (REPL, CLI, service) calls into; rendering and input
//! prompting live with the caller.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, email, birthday, address)
//! - **models**: the `Record` aggregate
//! - **book**: the `AddressBook` container, search and pagination
//! - **storage**: save/load of the book to a JSON file
//! - **error**: query, storage and config error types
//! - **config**: configuration from environment variables
//!
//! # Example
//!
//! ```
//! use rolodex::{AddressBook, Record};
//! use rolodex::domain::Name;
//!
//! let mut book = AddressBook::new();
//! let mut alice = Record::new(Name::new("Alice").unwrap());
//! alice.add_phone("123456789").unwrap();
//! book.add_record(alice);
//!
//! assert_eq!(book.find_by_term("ali").len(), 1);
//! ```

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use config::Config;
pub use domain::{Address, Birthday, Email, Name, Phone, ValidationError};
pub use error::{ConfigError, QueryError, StorageError};
pub use models::Record;
pub use storage::FileStore;
