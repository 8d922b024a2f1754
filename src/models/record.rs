//! Record model representing one contact entry.

use crate::domain::{Address, Birthday, Email, Name, Phone, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact record: a validated name plus any number of phones, emails
/// and notes, and an optional birthday and address.
///
/// Every phone and email held by a record has passed validation; raw
/// strings enter only through the domain constructors, both at creation
/// and on every edit. Duplicate phones and emails are permitted and kept
/// in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// The contact's name, also used as the AddressBook key
    name: Name,

    /// Phone numbers, ordered, duplicates permitted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    /// Email addresses, ordered, duplicates permitted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    emails: Vec<Email>,

    /// Birthday, at most one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    /// Postal address, at most one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,

    /// Free-text notes, ordered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    notes: Vec<String>,
}

impl Record {
    /// Create a new record with just a name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            emails: Vec::new(),
            birthday: None,
            address: None,
            notes: Vec::new(),
        }
    }

    /// The record's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Replace the name field.
    ///
    /// This does not touch any `AddressBook` key referring to the old
    /// name; re-keying a stored record goes through
    /// [`AddressBook::rename_record`](crate::book::AddressBook::rename_record).
    pub fn rename(&mut self, name: Name) {
        self.name = name;
    }

    /// Validate and append a phone number. Duplicates are permitted.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose rendered value equals `value`.
    ///
    /// Returns `false` when no such phone exists; that is not an error.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` with a newly validated `new`.
    ///
    /// `new` is validated before anything is removed, so a failed edit
    /// leaves the record untouched. When `old` is absent the new number
    /// is still appended.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(new)?;
        self.remove_phone(old);
        self.phones.push(phone);
        Ok(())
    }

    /// All phone numbers, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate and append an email address. Duplicates are permitted.
    pub fn add_email(&mut self, raw: &str) -> Result<(), ValidationError> {
        let email = Email::new(raw)?;
        self.emails.push(email);
        Ok(())
    }

    /// Remove the first email whose rendered value equals `value`.
    ///
    /// Returns `false` when no such email exists; that is not an error.
    pub fn remove_email(&mut self, value: &str) -> bool {
        match self.emails.iter().position(|e| e.as_str() == value) {
            Some(idx) => {
                self.emails.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace the first occurrence of `old` with a newly validated `new`.
    ///
    /// Same semantics as [`edit_phone`](Self::edit_phone): validation
    /// first, append even when `old` is absent.
    pub fn edit_email(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let email = Email::new(new)?;
        self.remove_email(old);
        self.emails.push(email);
        Ok(())
    }

    /// All email addresses, in insertion order.
    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    /// Set or clear the birthday.
    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// The birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or clear the address.
    pub fn set_address(&mut self, address: Option<Address>) {
        self.address = address;
    }

    /// The address, if set.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Append a free-text note.
    pub fn add_note(&mut self, text: impl Into<String>) {
        self.notes.push(text.into());
    }

    /// All notes, in insertion order.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Days to the next occurrence of the birthday, measured from today.
    ///
    /// Returns `None` when no birthday is set; 0 means the birthday is
    /// today.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Days to the next birthday occurrence measured from an explicit
    /// date. Deterministic variant of [`days_to_birthday`](Self::days_to_birthday).
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until(today))
    }

    /// Case-insensitive substring match against the name, every phone,
    /// and every email.
    ///
    /// One normalized policy for all fields; the record matches at most
    /// once no matter how many fields contain the term.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        self.name.as_str().to_lowercase().contains(&term)
            || self.phones.iter().any(|p| p.as_str().contains(&term))
            || self
                .emails
                .iter()
                .any(|e| e.as_str().to_lowercase().contains(&term))
    }
}

// Display support - human-readable summary, one line per present part
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;

        if !self.phones.is_empty() {
            let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
            write!(f, "\n  Phones: {}", phones.join(", "))?;
        }

        if !self.emails.is_empty() {
            let emails: Vec<&str> = self.emails.iter().map(|e| e.as_str()).collect();
            write!(f, "\n  Emails: {}", emails.join(", "))?;
        }

        if let Some(ref birthday) = self.birthday {
            write!(f, "\n  Birthday: {}", birthday)?;
            match self.days_to_birthday() {
                Some(0) => write!(f, " (today)")?,
                Some(days) => write!(f, " (in {} days)", days)?,
                None => {}
            }
        }

        if let Some(ref address) = self.address {
            write!(f, "\n  Address: {}", address)?;
        }

        for note in &self.notes {
            write!(f, "\n  Note: {}", note)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_record_new() {
        let rec = record("John Doe");
        assert_eq!(rec.name().as_str(), "John Doe");
        assert!(rec.phones().is_empty());
        assert!(rec.emails().is_empty());
        assert!(rec.birthday().is_none());
        assert!(rec.address().is_none());
    }

    #[test]
    fn test_add_phone_validates() {
        let mut rec = record("John");
        assert!(rec.add_phone("123456789").is_ok());
        assert!(rec.add_phone("not-a-phone").is_err());
        // Failed add leaves existing state untouched.
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_duplicate_phones_permitted() {
        let mut rec = record("John");
        rec.add_phone("123456789").unwrap();
        rec.add_phone("123456789").unwrap();
        assert_eq!(rec.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut rec = record("John");
        rec.add_phone("123456789").unwrap();
        rec.add_phone("123456789").unwrap();
        assert!(rec.remove_phone("123456789"));
        assert_eq!(rec.phones().len(), 1);
        // Removing an absent value is a no-op, not an error.
        assert!(!rec.remove_phone("999999999"));
        assert_eq!(rec.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_appends_when_old_absent() {
        let mut rec = record("John");
        rec.add_phone("111111111").unwrap();
        rec.edit_phone("222222222", "333333333").unwrap();
        let phones: Vec<&str> = rec.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["111111111", "333333333"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_keeps_old() {
        let mut rec = record("John");
        rec.add_phone("111111111").unwrap();
        assert!(rec.edit_phone("111111111", "bad").is_err());
        assert_eq!(rec.phones().len(), 1);
        assert_eq!(rec.phones()[0].as_str(), "111111111");
    }

    #[test]
    fn test_email_ops_mirror_phone_ops() {
        let mut rec = record("John");
        rec.add_email("a@example.com").unwrap();
        rec.add_email("a@example.com").unwrap();
        assert!(rec.add_email("nope").is_err());
        assert_eq!(rec.emails().len(), 2);
        assert!(rec.remove_email("a@example.com"));
        assert_eq!(rec.emails().len(), 1);
        rec.edit_email("a@example.com", "b@example.com").unwrap();
        assert_eq!(rec.emails().last().unwrap().as_str(), "b@example.com");
    }

    #[test]
    fn test_days_to_birthday_absent() {
        let rec = record("John");
        assert_eq!(rec.days_to_birthday(), None);
    }

    #[test]
    fn test_days_to_birthday_on_today() {
        let mut rec = record("John");
        rec.set_birthday(Some(Birthday::new("1990-06-15").unwrap()));
        let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        assert_eq!(rec.days_to_birthday_on(today), Some(0));
    }

    #[test]
    fn test_matches_term_name_case_insensitive() {
        let rec = record("Alice Cooper");
        assert!(rec.matches_term("ali"));
        assert!(rec.matches_term("COOPER"));
        assert!(!rec.matches_term("bob"));
    }

    #[test]
    fn test_matches_term_phone_and_email() {
        let mut rec = record("Alice");
        rec.add_phone("123456789").unwrap();
        rec.add_email("Alice@Example.com").unwrap();
        assert!(rec.matches_term("3456"));
        assert!(rec.matches_term("example.COM"));
        assert!(!rec.matches_term("xyz"));
    }

    #[test]
    fn test_notes_ordered() {
        let mut rec = record("Alice");
        rec.add_note("first");
        rec.add_note("second");
        assert_eq!(rec.notes(), &["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_display_includes_only_present_parts() {
        let mut rec = record("Alice");
        let rendered = rec.to_string();
        assert_eq!(rendered, "Alice");

        rec.add_phone("123456789").unwrap();
        rec.set_address(Some(Address::new("1 Main St", "Springfield", "12345", "USA")));
        let rendered = rec.to_string();
        assert!(rendered.contains("Phones: 123456789"));
        assert!(rendered.contains("Address: 1 Main St"));
        assert!(!rendered.contains("Emails"));
        assert!(!rendered.contains("Birthday"));
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let mut rec = record("Alice");
        rec.add_phone("123456789").unwrap();
        rec.add_phone("123456789").unwrap();
        rec.add_email("alice@example.com").unwrap();
        rec.set_birthday(Some(Birthday::new("1990-01-01").unwrap()));
        rec.set_address(Some(Address::new("1 Main St", "Springfield", "12345", "USA")));
        rec.add_note("likes tea");

        let json = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn test_record_deserialization_rejects_invalid_fields() {
        let json = r#"{"name":"Alice","phones":["12"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
