//! Contact service layer.
//!
//! Business logic for adding, changing, looking up and deleting contacts.

use crate::config::NamePolicy;
use crate::error::{BotError, BotResult};
use crate::models::ContactRecord;
use crate::repositories::{AddressBook, ContactRepository};

/// What `add_phone` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was stored with the phone as its first number.
    Created,
    /// The phone was appended to an existing record.
    PhoneAdded,
}

/// Contact service trait for business operations.
pub trait ContactService {
    /// Add a phone to the named contact, creating the contact if needed.
    ///
    /// A new contact whose first phone is invalid is not stored.
    fn add_phone(&mut self, name: &str, phone: &str) -> BotResult<AddOutcome>;

    /// Replace `old` with `new` on the named contact.
    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BotResult<()>;

    /// Get the named contact.
    fn get_contact(&self, name: &str) -> BotResult<&ContactRecord>;

    /// All contacts in insertion order.
    fn list_contacts(&self) -> Vec<&ContactRecord>;

    /// Delete the named contact.
    fn delete_contact(&mut self, name: &str) -> BotResult<()>;
}

/// Default implementation of ContactService.
///
/// Owns the repository; names pass through the configured [`NamePolicy`]
/// before they reach it.
#[derive(Debug)]
pub struct ContactServiceImpl<R = AddressBook> {
    repo: R,
    name_policy: NamePolicy,
}

impl<R: ContactRepository> ContactServiceImpl<R> {
    /// Create a new contact service.
    pub fn new(repo: R, name_policy: NamePolicy) -> Self {
        Self { repo, name_policy }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}

impl<R: ContactRepository> ContactService for ContactServiceImpl<R> {
    fn add_phone(&mut self, name: &str, phone: &str) -> BotResult<AddOutcome> {
        let name = self.name_policy.normalize(name);

        if let Some(record) = self.repo.find_mut(&name) {
            record.add_phone(phone)?;
            tracing::debug!(name = %name, "Added phone to existing contact");
            return Ok(AddOutcome::PhoneAdded);
        }

        let mut record = ContactRecord::new(&*name);
        record.add_phone(phone)?;
        self.repo.add_record(record);
        tracing::debug!(name = %name, "Created contact");
        Ok(AddOutcome::Created)
    }

    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> BotResult<()> {
        let name = self.name_policy.normalize(name);
        let record = self
            .repo
            .find_mut(&name)
            .ok_or(BotError::ContactNotFound)?;

        record.edit_phone(old, new)?;
        tracing::debug!(name = %name, "Changed contact phone");
        Ok(())
    }

    fn get_contact(&self, name: &str) -> BotResult<&ContactRecord> {
        let name = self.name_policy.normalize(name);
        self.repo.find(&name).ok_or(BotError::ContactNotFound)
    }

    fn list_contacts(&self) -> Vec<&ContactRecord> {
        self.repo.records()
    }

    fn delete_contact(&mut self, name: &str) -> BotResult<()> {
        let name = self.name_policy.normalize(name);
        self.repo
            .delete(&name)
            .ok_or(BotError::ContactNotFound)?;
        tracing::debug!(name = %name, "Deleted contact");
        Ok(())
    }
}
