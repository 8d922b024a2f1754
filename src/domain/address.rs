//! Address composite value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal address attached to a record.
///
/// Unlike the other field types, no per-component validation applies;
/// the components are free text and are concatenated for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Address {
    /// Street and number
    pub street: String,

    /// City or town
    pub city: String,

    /// Postal or ZIP code
    pub postal_code: String,

    /// Country
    pub country: String,
}

impl Address {
    /// Create a new address from its four components.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }
}

// Display support - joins non-empty components with ", "
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.street.as_str(),
            self.city.as_str(),
            self.postal_code.as_str(),
            self.country.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

        write!(f, "{}", parts.join(", "))
    }
}
