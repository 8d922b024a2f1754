//! Error types for the contact store.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::errors`].

use thiserror::Error;

/// Errors that can occur during birthday queries.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// Day count for a birthday window must be non-negative
    #[error("Invalid day count: {0} (must be non-negative)")]
    InvalidDayCount(i64),
}

/// Errors that can occur during persistence.
///
/// A missing file on load is not an error; it is the bootstrap path and
/// yields an empty book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON or contains invalid field values
    #[error("Decode error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The book file was written by an unknown format version
    #[error("Unsupported book file version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with QueryError
pub type QueryResult<T> = Result<T, QueryError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
