use contact_bot::models::ContactRecord;
use contact_bot::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Stores records in a plain map and tracks method calls so tests can verify
/// how the service layer drives the repository.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    contacts: HashMap<String, ContactRecord>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record without counting it as a call.
    pub fn add_contact(&mut self, record: ContactRecord) {
        self.contacts
            .insert(record.name().as_str().to_string(), record);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.borrow();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.borrow_mut();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add_record(&mut self, record: ContactRecord) {
        self.track_call("add_record");
        self.contacts
            .insert(record.name().as_str().to_string(), record);
    }

    fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.track_call("find");
        self.contacts.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.track_call("find_mut");
        self.contacts.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        self.track_call("delete");
        self.contacts.remove(name)
    }

    fn records(&self) -> Vec<&ContactRecord> {
        self.track_call("records");
        let mut records: Vec<&ContactRecord> = self.contacts.values().collect();
        records.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        records
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
