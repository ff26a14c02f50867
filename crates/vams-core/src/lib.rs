//! # vams-core: Foundational Types for the Vendor Agreement Stack
//!
//! This crate defines the vendor record model and the primitives every other
//! crate in the workspace builds on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `VendorId`, `AgreementId`,
//!    `VendorCode`, `FileRef`. No bare strings where an identifier is meant.
//!
//! 2. **Immutable vendor code.** `VendorCode` is generated once when a draft
//!    record is created and has no mutation path afterwards.
//!
//! 3. **Derived agreement status.** `Agreement::status()` is read-only. The
//!    status is recomputed from the date range whenever a date changes.
//!
//! 4. **Single `FieldKey` enum.** Every field the mandatory-field policy can
//!    name is one variant, so a policy table and its consumers share one
//!    vocabulary.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vams-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public data types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod agreement;
pub mod error;
pub mod field;
pub mod identity;
pub mod location;
pub mod temporal;
pub mod vendor;

// Re-export primary types for ergonomic imports.
pub use agreement::{compute_status, Agreement, AgreementField, AgreementStatus, AgreementType};
pub use error::VamsError;
pub use field::{DocumentKind, FieldKey};
pub use identity::{AgreementId, FileRef, VendorCode, VendorId};
pub use location::{City, LocationHierarchy, Province};
pub use temporal::{parse_calendar_date, today_utc, Timestamp};
pub use vendor::{
    BankDetails, DocumentSlot, LegalDocuments, PaymentMethod, RegionalCoverage, TaxConfig,
    VendorRecord, VendorType,
};
