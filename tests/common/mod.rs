//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use rolodex::domain::{Birthday, Name};
use rolodex::{AddressBook, Config, Record};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber honoring the configured log level.
///
/// Captured per test by the libtest writer; safe to call from every
/// test, only the first installation wins.
pub fn init_logging() {
    let config = Config::from_env().unwrap_or_default();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level))
        .with_test_writer()
        .try_init();
}

/// A record with just a name.
pub fn record(name: &str) -> Record {
    Record::new(Name::new(name).unwrap())
}

/// A record with a name and a birthday.
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut rec = record(name);
    rec.set_birthday(Some(Birthday::new(birthday).unwrap()));
    rec
}

/// A book populated with `count` records named "Contact 01".."Contact NN".
pub fn book_of(count: usize) -> AddressBook {
    init_logging();
    let mut book = AddressBook::new();
    for i in 1..=count {
        book.add_record(record(&format!("Contact {:02}", i)));
    }
    book
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
