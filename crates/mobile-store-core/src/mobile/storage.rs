use std::collections::HashSet;

use super::types::{Mobile, MobileStorageError};

/// Operations every mobile record backend supports.
///
/// Lookups and uniqueness checks are keyed on the IMEI only; the model is
/// carried along but never participates in matching.
pub trait MobileStorage {
    /// Snapshot of every stored record.
    fn get_all(&self) -> HashSet<Mobile>;

    /// The record whose IMEI equals `imei`, if any.
    fn find_by_imei(&self, imei: &str) -> Option<&Mobile>;

    /// Insert a new record and persist the updated set. Fails with
    /// [`MobileStorageError::AlreadyExists`] when the IMEI is taken,
    /// whatever the model.
    fn save(&mut self, mobile: Mobile) -> Result<Mobile, MobileStorageError>;

    /// Remove the record sharing `mobile`'s IMEI and persist the updated
    /// set. Fails with [`MobileStorageError::NothingToDelete`] when no such
    /// record exists.
    fn delete(&mut self, mobile: &Mobile) -> Result<(), MobileStorageError>;

    /// Whether a record with `mobile`'s IMEI is stored.
    fn exists(&self, mobile: &Mobile) -> bool {
        self.find_by_imei(&mobile.imei).is_some()
    }
}
