use crate::models::ContactRecord;

/// Storage for contact records, keyed by contact name.
///
/// Lookups are exact string matches on the key. Any case folding happens
/// before a name reaches the repository.
pub trait ContactRepository {
    /// Insert `record` under its own name, replacing any record already
    /// stored there.
    fn add_record(&mut self, record: ContactRecord);

    /// Retrieve a record by name.
    fn find(&self, name: &str) -> Option<&ContactRecord>;

    /// Retrieve a record by name for modification.
    fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord>;

    /// Remove a record by name. Removing an absent name is not an error.
    fn delete(&mut self, name: &str) -> Option<ContactRecord>;

    /// All records, in the order their names were first stored.
    fn records(&self) -> Vec<&ContactRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
