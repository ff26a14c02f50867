//! # vams-state: Vendor Editing State
//!
//! Everything that changes while a vendor record is open for editing.
//!
//! ## Modules
//!
//! - **Coverage** (`coverage.rs`): cascading province → city → district
//!   selection and the coverage-set transformations (add district, remove
//!   district, remove entry). Districts can only be added through a
//!   [`DistrictChoice`] handed out by the available-districts query, so a
//!   structurally invalid or duplicate selection cannot be expressed.
//!
//! - **Agreements** (`agreements.rs`): append, remove and single-field update
//!   of a vendor's agreement list, with status re-derivation on date edits.
//!
//! - **Session** (`session.rs`): an immutable [`EditSession`] snapshot and a
//!   reducer `(session, event) -> session`. Every mutation the form can make
//!   is one [`SessionEvent`] case.
//!
//! ## Design
//!
//! All operations are synchronous and total. Events that cannot apply
//! (unknown agreement id, incomplete coverage selection) return the input
//! unchanged and are logged at `debug`.

pub mod agreements;
pub mod coverage;
pub mod session;

pub use agreements::{add_agreement, remove_agreement, update_agreement};
pub use coverage::{CoverageEditor, CoverageSelection, DistrictChoice};
pub use session::{reduce, EditSession, ReduceContext, SessionEvent};
