//! # Agreement List Operations
//!
//! Append, remove and update operations over a vendor's ordered agreement
//! list. Each operation returns the next list and leaves its input intact.
//!
//! Status is never written here: [`update_agreement`] hands the edit to
//! [`Agreement::apply`], which re-derives the status when a date changes.
//! Operations naming an unknown identifier return the list unchanged.

use chrono::NaiveDate;
use vams_core::{Agreement, AgreementField, AgreementId};

/// Append a new agreement with empty fields and status `Inactive`.
pub fn add_agreement(agreements: &[Agreement], id: AgreementId) -> Vec<Agreement> {
    let mut next = agreements.to_vec();
    next.push(Agreement::new(id));
    next
}

/// Remove the agreement with the given identifier.
pub fn remove_agreement(agreements: &[Agreement], id: AgreementId) -> Vec<Agreement> {
    agreements.iter().filter(|a| a.id() != id).cloned().collect()
}

/// Apply a single-field edit to the agreement with the given identifier.
pub fn update_agreement(
    agreements: &[Agreement],
    id: AgreementId,
    field: AgreementField,
    today: NaiveDate,
) -> Vec<Agreement> {
    agreements
        .iter()
        .map(|a| {
            if a.id() == id {
                a.clone().with(field.clone(), today)
            } else {
                a.clone()
            }
        })
        .collect()
}

/// Whether the list holds an agreement with the given identifier.
pub fn contains(agreements: &[Agreement], id: AgreementId) -> bool {
    agreements.iter().any(|a| a.id() == id)
}
