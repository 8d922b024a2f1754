//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact fields: names,
//! phone numbers, email addresses, birthdays, and postal addresses.
//! These value objects provide validation at construction time and
//! prevent invalid data from being represented in the system.

pub mod address;
pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use birthday::Birthday;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
