//! Disk persistence for address books.

pub mod file_store;

pub use file_store::FileStore;
