//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{9}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A phone number is exactly nine ASCII digits, no separators.
///
/// # Example
///
/// ```
/// use rolodex::domain::Phone;
///
/// let phone = Phone::new("123456789").unwrap();
/// assert_eq!(phone.as_str(), "123456789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is
    /// exactly nine ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !PHONE_REGEX.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
