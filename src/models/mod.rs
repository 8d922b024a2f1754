//! Data models for the contact store.
//!
//! This module contains the `Record` aggregate, which combines the
//! validated field types from [`crate::domain`] into one contact entry.

pub mod record;

pub use record::Record;
