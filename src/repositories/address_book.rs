use crate::models::ContactRecord;
use crate::repositories::traits::ContactRepository;
use std::collections::HashMap;

/// In-memory contact repository.
///
/// Records live for the lifetime of the process. Iteration follows the order
/// in which names were first inserted; overwriting a name keeps its slot.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, ContactRecord>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty AddressBook.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactRepository for AddressBook {
    fn add_record(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();

        if self.records.insert(key.clone(), record).is_some() {
            tracing::debug!(name = %key, "Overwrote existing contact record");
        } else {
            self.order.push(key);
        }
    }

    fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let removed = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        Some(removed)
    }

    fn records(&self) -> Vec<&ContactRecord> {
        self.order
            .iter()
            .filter_map(|key| self.records.get(key))
            .collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
