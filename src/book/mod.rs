//! The address book container.
//!
//! `AddressBook` maps names to [`Record`]s and provides the query
//! surface consumed by a command layer: add/delete/rename, substring
//! search, fixed-size pagination, and birthday-proximity queries.

pub mod pages;

pub use pages::Pages;

use crate::domain::{Name, ValidationError};
use crate::error::{QueryError, QueryResult};
use crate::models::Record;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A keyed collection of contact records.
///
/// Records are keyed by their name string; iteration order is the sorted
/// key order, which makes search results and pagination deterministic.
/// The book exclusively owns its records: insertion and removal go
/// through the book so the key index stays consistent, and renaming a
/// stored record goes through [`rename_record`](Self::rename_record).
///
/// Designed for single-threaded use; callers that share a book across
/// threads must serialize mutation behind a lock of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
    page_size: usize,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    /// Create an empty book with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty book with a custom page size.
    ///
    /// A page size of zero is clamped to one.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: BTreeMap::new(),
            page_size: page_size.max(1),
        }
    }

    /// The configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record, keyed by its name.
    ///
    /// Overwriting an existing name replaces the old record wholesale
    /// (no merge); the replaced record is returned so the caller can
    /// decide whether that was intended.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let replaced = self.records.insert(key.clone(), record);
        if replaced.is_some() {
            warn!(name = %key, "replaced existing record");
        } else {
            debug!(name = %key, "added record");
        }
        replaced
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns `false` when no such record exists; deletion is
    /// idempotent and an absent name is informational, not an error.
    pub fn delete_record(&mut self, name: &str) -> bool {
        match self.records.remove(name) {
            Some(_) => {
                debug!(name, "deleted record");
                true
            }
            None => {
                info!(name, "delete requested for unknown record");
                false
            }
        }
    }

    /// Atomically re-key a record under a new name.
    ///
    /// Validates the new name, removes the old entry, renames the record
    /// and re-inserts it, so the key and the record's name field never
    /// diverge. Returns `Ok(false)` when `old` is absent. An existing
    /// record under the new name is replaced, as with
    /// [`add_record`](Self::add_record).
    pub fn rename_record(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new_name = Name::new(new)?;
        let Some(mut record) = self.records.remove(old) else {
            info!(name = old, "rename requested for unknown record");
            return Ok(false);
        };
        record.rename(new_name);
        if self.add_record(record).is_some() {
            warn!(old, new, "rename replaced an existing record");
        }
        debug!(old, new, "renamed record");
        Ok(true)
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup by exact name, for in-place edits.
    ///
    /// Renaming through this reference would desync the key; use
    /// [`rename_record`](Self::rename_record) instead.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterate over all records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Find records matching `term` as a case-insensitive substring of
    /// the name, any phone, or any email.
    ///
    /// Each record appears at most once no matter how many of its
    /// fields match.
    pub fn find_by_term(&self, term: &str) -> Vec<&Record> {
        let results: Vec<&Record> = self
            .records
            .values()
            .filter(|record| record.matches_term(term))
            .collect();
        debug!(term, hits = results.len(), "search");
        results
    }

    /// A fresh pagination cursor over the current records.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self.records.values().collect(), self.page_size)
    }

    /// Names of records whose next birthday is at most `days` away.
    ///
    /// 0 is a valid distance meaning "today". Records without a birthday
    /// are skipped.
    ///
    /// # Errors
    ///
    /// `QueryError::InvalidDayCount` when `days` is negative.
    pub fn upcoming_birthdays(&self, days: i64) -> QueryResult<Vec<String>> {
        self.upcoming_birthdays_on(days, Local::now().date_naive())
    }

    /// Deterministic variant of [`upcoming_birthdays`](Self::upcoming_birthdays)
    /// measured from an explicit date.
    pub fn upcoming_birthdays_on(&self, days: i64, today: NaiveDate) -> QueryResult<Vec<String>> {
        Ok(self
            .birthdays_in_window(days, today)?
            .into_iter()
            .map(|record| record.name().as_str().to_string())
            .collect())
    }

    /// Records whose next birthday is at most `days` away.
    ///
    /// # Errors
    ///
    /// `QueryError::InvalidDayCount` when `days` is negative.
    pub fn find_by_birthday_range(&self, days: i64) -> QueryResult<Vec<&Record>> {
        self.find_by_birthday_range_on(days, Local::now().date_naive())
    }

    /// Deterministic variant of [`find_by_birthday_range`](Self::find_by_birthday_range).
    pub fn find_by_birthday_range_on(
        &self,
        days: i64,
        today: NaiveDate,
    ) -> QueryResult<Vec<&Record>> {
        self.birthdays_in_window(days, today)
    }

    /// Names with a birthday in the window, grouped by the weekday the
    /// next occurrence falls on, groups in chronological order.
    ///
    /// # Errors
    ///
    /// `QueryError::InvalidDayCount` when `days` is negative.
    pub fn upcoming_birthdays_by_weekday(
        &self,
        days: i64,
    ) -> QueryResult<Vec<(Weekday, Vec<String>)>> {
        self.upcoming_birthdays_by_weekday_on(days, Local::now().date_naive())
    }

    /// Deterministic variant of
    /// [`upcoming_birthdays_by_weekday`](Self::upcoming_birthdays_by_weekday).
    pub fn upcoming_birthdays_by_weekday_on(
        &self,
        days: i64,
        today: NaiveDate,
    ) -> QueryResult<Vec<(Weekday, Vec<String>)>> {
        let mut by_date: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
        for record in self.birthdays_in_window(days, today)? {
            // birthdays_in_window only yields records with a birthday
            if let Some(birthday) = record.birthday() {
                by_date
                    .entry(birthday.next_occurrence(today))
                    .or_default()
                    .push(record.name().as_str().to_string());
            }
        }
        Ok(by_date
            .into_iter()
            .map(|(date, names)| (date.weekday(), names))
            .collect())
    }

    fn birthdays_in_window(&self, days: i64, today: NaiveDate) -> QueryResult<Vec<&Record>> {
        if days < 0 {
            return Err(QueryError::InvalidDayCount(days));
        }
        Ok(self
            .records
            .values()
            .filter(|record| {
                record
                    .days_to_birthday_on(today)
                    .is_some_and(|distance| distance <= days)
            })
            .collect())
    }

    pub(crate) fn from_parts(records: Vec<Record>, page_size: usize) -> Self {
        let mut book = Self::with_page_size(page_size);
        for record in records {
            book.add_record(record);
        }
        book
    }
}
