//! # Vendor Store
//!
//! The persistence boundary for vendor records. [`VendorStore`] is the seam a
//! durable backend would implement; [`InMemoryVendorStore`] keeps records in
//! an ordered map and doubles as the registry of NPWP numbers already in use.
//!
//! ## Invariants
//!
//! - Vendor ids and vendor codes are unique across the store.
//! - `update` never changes a stored record's vendor code.

use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

use vams_core::{VendorCode, VendorId, VendorRecord};
use vams_policy::IdentifierRegistry;

/// Errors returned by a [`VendorStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The write collides with a stored record.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No stored record has this id.
    #[error("{0} not found")]
    NotFound(VendorId),
}

/// Storage for vendor master records.
pub trait VendorStore {
    /// Store a new record. Fails if its id or vendor code is already taken.
    fn insert(&mut self, record: VendorRecord) -> Result<VendorId, StoreError>;

    /// Replace a stored record with the same id.
    fn update(&mut self, record: VendorRecord) -> Result<(), StoreError>;

    fn get(&self, id: VendorId) -> Option<VendorRecord>;

    /// All records, newest first.
    fn list(&self) -> Vec<VendorRecord>;
}

/// Vendor records held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVendorStore {
    records: BTreeMap<VendorId, VendorRecord>,
}

impl InMemoryVendorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `records`.
    pub fn with_records(
        records: impl IntoIterator<Item = VendorRecord>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by vendor code.
    pub fn find_by_code(&self, code: &VendorCode) -> Option<&VendorRecord> {
        self.records.values().find(|r| r.vendor_code() == code)
    }
}

impl VendorStore for InMemoryVendorStore {
    fn insert(&mut self, record: VendorRecord) -> Result<VendorId, StoreError> {
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(StoreError::Conflict(format!("{id} already exists")));
        }
        if self.find_by_code(record.vendor_code()).is_some() {
            return Err(StoreError::Conflict(format!(
                "vendor code {} already in use",
                record.vendor_code()
            )));
        }
        debug!(vendor = %id, code = %record.vendor_code(), "vendor inserted");
        self.records.insert(id, record);
        Ok(id)
    }

    fn update(&mut self, record: VendorRecord) -> Result<(), StoreError> {
        let id = record.id();
        let stored = self.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if stored.vendor_code() != record.vendor_code() {
            return Err(StoreError::Conflict(format!(
                "vendor code of {id} is {}, not {}",
                stored.vendor_code(),
                record.vendor_code()
            )));
        }
        debug!(vendor = %id, code = %record.vendor_code(), "vendor updated");
        *stored = record;
        Ok(())
    }

    fn get(&self, id: VendorId) -> Option<VendorRecord> {
        self.records.get(&id).cloned()
    }

    fn list(&self) -> Vec<VendorRecord> {
        let mut records: Vec<VendorRecord> = self.records.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.vendor_code().cmp(b.vendor_code()))
        });
        records
    }
}

impl IdentifierRegistry for InMemoryVendorStore {
    fn exists(&self, identifier: &str) -> bool {
        let identifier = identifier.trim();
        self.records.values().any(|r| r.npwp() == Some(identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(millis: i64, npwp: &str) -> VendorRecord {
        let mut r = VendorRecord::new_draft_at(Utc.timestamp_millis_opt(millis).unwrap());
        r.documents.npwp.number = npwp.to_string();
        r
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = InMemoryVendorStore::new();
        let r = record(1_000_001, "11.111.111.1-111.000");
        let id = store.insert(r.clone()).unwrap();
        assert_eq!(store.get(id), Some(r));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = InMemoryVendorStore::new();
        let r = record(1, "");
        store.insert(r.clone()).unwrap();
        assert!(matches!(store.insert(r), Err(StoreError::Conflict(_))));
    }

    #[test]
    fn test_insert_rejects_duplicate_vendor_code() {
        let mut store = InMemoryVendorStore::new();
        // Same last six millisecond digits, different ids.
        store.insert(record(1_000_042, "")).unwrap();
        let err = store.insert(record(2_000_042, "")).unwrap_err();
        assert!(err.to_string().contains("VND000042"));
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut store = InMemoryVendorStore::new();
        let r = record(1, "");
        assert_eq!(store.update(r.clone()), Err(StoreError::NotFound(r.id())));
    }

    #[test]
    fn test_update_replaces_record() {
        let mut store = InMemoryVendorStore::new();
        let mut r = record(1, "");
        let id = store.insert(r.clone()).unwrap();
        r.vendor_name = "PT Baru".into();
        store.update(r).unwrap();
        assert_eq!(store.get(id).unwrap().vendor_name, "PT Baru");
    }

    #[test]
    fn test_list_newest_first() {
        let older = record(1_000_000, "");
        let newer = record(2_000_001, "");
        let store = InMemoryVendorStore::with_records([older.clone(), newer.clone()]).unwrap();
        let ids: Vec<VendorId> = store.list().iter().map(|r| r.id()).collect();
        assert_eq!(ids, [newer.id(), older.id()]);
    }

    #[test]
    fn test_store_is_npwp_registry() {
        let store =
            InMemoryVendorStore::with_records([record(1, "12.345.678.9-012.000")]).unwrap();
        assert!(store.exists("12.345.678.9-012.000"));
        assert!(store.exists(" 12.345.678.9-012.000 "));
        assert!(!store.exists("98.765.432.1-321.000"));
        assert!(!store.exists(""));
    }
}
