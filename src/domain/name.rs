//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// This ensures that names are validated at construction time and cannot
/// be empty. No other format constraint applies.
///
/// # Example
///
/// ```
/// use rolodex::domain::Name;
///
/// let name = Name::new("Alice Cooper").unwrap();
/// assert_eq!(name.as_str(), "Alice Cooper");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not empty.
    ///
    /// Whitespace-only input counts as empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
