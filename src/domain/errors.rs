//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number (expected 9 digits): {}", phone)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday (expected YYYY-MM-DD): {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
