//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used for parsing and rendering birthdays.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A type-safe wrapper for birthdays.
///
/// This ensures that birthdays are real calendar dates, parsed from the
/// `YYYY-MM-DD` format at construction time.
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("1990-01-01").unwrap();
/// assert_eq!(birthday.to_string(), "1990-01-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not
    /// parse as a real calendar date.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();
        NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(date))
    }

    /// Create a Birthday directly from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date (including the birth year).
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday's month/day on or after `today`.
    ///
    /// Feb 29 birthdays fall on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let occurrence_in = |year: i32| {
            NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
                .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 is valid"))
        };

        let this_year = occurrence_in(today.year());
        if this_year < today {
            occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }

    /// Days from `today` to the next occurrence of this birthday.
    ///
    /// Returns 0 when the birthday is today, otherwise a positive count,
    /// rolling over to next year when this year's date has passed.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

// Serde support - serialize as YYYY-MM-DD string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
