//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// This ensures that email addresses are validated at construction time.
/// The validation checks for a conventional `local@domain.tld` shape.
///
/// # Example
///
/// ```
/// use rolodex::domain::Email;
///
/// let email = Email::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain exactly one '@' symbol
    /// - Must have a local part before '@'
    /// - Must have a domain part after '@' ending in a `.tld` of at
    ///   least two letters
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !EMAIL_REGEX.is_match(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
