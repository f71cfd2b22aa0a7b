//! A contact and the phone numbers stored for it.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{BotError, BotResult};
use serde::Serialize;
use std::fmt;

/// A single address book entry.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates; lookups always act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `phone` and append it.
    pub fn add_phone(&mut self, phone: &str) -> BotResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BotResult<()> {
        let index = self.position(phone).ok_or(BotError::PhoneNotFound)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// The lookup happens before validation, so a missing `old` is reported
    /// as `PhoneNotFound` even when `new` is also malformed.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BotResult<()> {
        let index = self.position(old).ok_or(BotError::PhoneNotFound)?;
        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Phones joined with `"; "`, empty when there are none.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn record_with(phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new("alice");
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = ContactRecord::new("alice");
        assert_eq!(record.name().as_str(), "alice");
        assert!(record.phones().is_empty());
        assert_eq!(record.to_string(), "Contact name: alice, phones: ");
    }

    #[test]
    fn test_add_phone_appends_in_order() {
        let record = record_with(&["1234567890", "0987654321"]);
        assert_eq!(record.phones_display(), "1234567890; 0987654321");
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let record = record_with(&["1234567890", "1234567890"]);
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = ContactRecord::new("alice");
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            BotError::Validation(ValidationError::InvalidPhone("12345".to_string()))
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111").unwrap();
        assert_eq!(record.phones_display(), "2222222222; 1111111111");
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut record = record_with(&["1111111111"]);
        assert_eq!(
            record.remove_phone("2222222222"),
            Err(BotError::PhoneNotFound)
        );
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record_with(&["1234567890", "0987654321"]);
        record.edit_phone("1234567890", "1111111111").unwrap();
        assert_eq!(record.phones_display(), "1111111111; 0987654321");
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = record_with(&["1234567890"]);
        assert_eq!(
            record.edit_phone("0000000000", "bad"),
            Err(BotError::PhoneNotFound)
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record_untouched() {
        let mut record = record_with(&["1234567890"]);
        let err = record.edit_phone("1234567890", "123").unwrap_err();
        assert!(matches!(err, BotError::Validation(_)));
        assert_eq!(record.phones_display(), "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with(&["1234567890"]);
        assert_eq!(
            record.find_phone("1234567890").map(PhoneNumber::as_str),
            Some("1234567890")
        );
        assert!(record.find_phone("0000000000").is_none());
        assert!(record.find_phone("not a phone").is_none());
    }

    #[test]
    fn test_display() {
        let record = record_with(&["1234567890", "0987654321"]);
        assert_eq!(
            record.to_string(),
            "Contact name: alice, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_serialization() {
        let record = record_with(&["1234567890"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "alice", "phones": ["1234567890"] })
        );
    }
}
