//! Configuration management for the contact store.
//!
//! This module handles loading and validating configuration from environment
//! variables, with a `.env` file picked up when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for a contact store instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted book file (default: "address_book.json")
    pub book_path: PathBuf,

    /// Records per page for pagination (default: 5, must be >= 1)
    pub page_size: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ADDRESS_BOOK_PATH`: book file location (default: "address_book.json")
    /// - `ADDRESS_BOOK_PAGE_SIZE`: records per page (default: 5)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Pick up a .env file if one exists, without failing when absent.
        let _ = dotenvy::dotenv();

        let book_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("address_book.json"));

        let page_size = Self::parse_env_usize("ADDRESS_BOOK_PAGE_SIZE", 5)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            page_size,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("address_book.json"),
            page_size: 5,
            log_level: "error".to_string(),
        }
    }
}
