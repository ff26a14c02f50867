//! # vams-policy: Mandatory-Field Policy
//!
//! Decides which vendor fields are required and checks a record against
//! those requirements before it is saved.
//!
//! - **Mandatory table** (`mandatory.rs`): a lookup from [`VendorType`] to
//!   the set of [`FieldKey`]s that must be supplied. Built once.
//!
//! - **Registry** (`registry.rs`): the [`IdentifierRegistry`] seam used to
//!   reject NPWP numbers that are already registered.
//!
//! - **Validation** (`validate.rs`): runs every rule in a fixed order and
//!   accumulates the results into a [`ValidationReport`] of
//!   `(field, rule)` pairs. Display text is left to the caller.
//!
//! ## Crate Policy
//!
//! - Depends only on `vams-core` internally.
//! - Validation is pure: no I/O, no logging, no clock reads.
//!
//! [`VendorType`]: vams_core::VendorType
//! [`FieldKey`]: vams_core::FieldKey

pub mod mandatory;
pub mod registry;
pub mod validate;

pub use mandatory::{is_mandatory, MandatoryTable};
pub use registry::{IdentifierRegistry, StaticRegistry};
pub use validate::{validate, validate_record, Rule, ValidationReport, Violation};
