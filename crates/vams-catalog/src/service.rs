//! # Vendor Service
//!
//! Ties an edit session to storage. A save validates the session's record
//! with the mandatory-field policy and writes it only when the report is
//! empty, so a record is never partially persisted.
//!
//! NPWP uniqueness is checked against both the records already in the store
//! and an external registry of identifiers registered elsewhere.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use vams_core::{VendorId, VendorRecord};
use vams_policy::{validate_record, IdentifierRegistry, StaticRegistry, ValidationReport};
use vams_state::EditSession;

use crate::listing::{flatten, AgreementRow};
use crate::store::{StoreError, VendorStore};

/// Why a save did not happen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    #[error("vendor record is invalid:\n{0}")]
    Invalid(ValidationReport),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Identifier lookups answered by either of two registries.
struct EitherRegistry<'a> {
    first: &'a dyn IdentifierRegistry,
    second: &'a dyn IdentifierRegistry,
}

impl IdentifierRegistry for EitherRegistry<'_> {
    fn exists(&self, identifier: &str) -> bool {
        self.first.exists(identifier) || self.second.exists(identifier)
    }
}

/// Validated access to a [`VendorStore`].
#[derive(Debug, Clone)]
pub struct VendorService<S> {
    store: S,
    registry: StaticRegistry,
}

impl<S> VendorService<S>
where
    S: VendorStore + IdentifierRegistry,
{
    pub fn new(store: S, registry: StaticRegistry) -> Self {
        Self { store, registry }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &StaticRegistry {
        &self.registry
    }

    /// Validate the session's record without saving it.
    pub fn check(&self, session: &EditSession) -> ValidationReport {
        let registry = EitherRegistry {
            first: &self.store,
            second: &self.registry,
        };
        validate_record(session.record(), session.is_new(), &registry)
    }

    /// Validate and persist the session's record.
    ///
    /// New vendors are inserted; existing vendors replace their stored
    /// record. On any error the store is unchanged.
    pub fn save(&mut self, session: &EditSession) -> Result<VendorId, SaveError> {
        let record = session.record();
        let report = self.check(session);
        if !report.is_valid() {
            warn!(
                vendor = %record.id(),
                code = %record.vendor_code(),
                violations = report.len(),
                "vendor save rejected"
            );
            return Err(SaveError::Invalid(report));
        }

        let id = if session.is_new() {
            self.store.insert(record.clone())?
        } else {
            self.store.update(record.clone())?;
            record.id()
        };
        info!(
            vendor = %id,
            code = %record.vendor_code(),
            new = session.is_new(),
            "vendor saved"
        );
        Ok(id)
    }

    /// Open a stored vendor for editing, with statuses derived for `today`.
    pub fn open(&self, id: VendorId, today: NaiveDate) -> Option<EditSession> {
        self.store.get(id).map(|record| EditSession::open(record, today))
    }

    /// All stored vendors, newest first.
    pub fn vendors(&self) -> Vec<VendorRecord> {
        self.store.list()
    }

    /// The agreement list for `today`.
    pub fn rows(&self, today: NaiveDate) -> Vec<AgreementRow> {
        flatten(&self.store.list(), today)
    }
}
