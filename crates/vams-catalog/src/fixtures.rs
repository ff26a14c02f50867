//! Demonstration data: two registered vendors and the NPWP numbers the
//! external registry already knows about.

use thiserror::Error;
use vams_core::{VamsError, VendorRecord};
use vams_policy::StaticRegistry;

use crate::store::{InMemoryVendorStore, StoreError};

/// NPWP numbers registered outside this store.
pub const REGISTERED_NPWPS: &[&str] = &["12.345.678.9-012.000", "98.765.432.1-321.000"];

const VENDORS_YAML: &str = include_str!("../data/vendors.yaml");

/// The external registry seeded with [`REGISTERED_NPWPS`].
pub fn registry() -> StaticRegistry {
    StaticRegistry::new(REGISTERED_NPWPS.iter().copied())
}

/// The demonstration vendors, newest first.
pub fn vendors() -> Result<Vec<VendorRecord>, VamsError> {
    parse_vendors_yaml(VENDORS_YAML)
}

/// Parse a YAML list of vendor records.
pub fn parse_vendors_yaml(yaml: &str) -> Result<Vec<VendorRecord>, VamsError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// A store holding the demonstration vendors.
pub fn store() -> Result<InMemoryVendorStore, FixtureError> {
    Ok(InMemoryVendorStore::with_records(vendors()?)?)
}

/// Errors while building the demonstration store.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixture data: {0}")]
    Data(#[from] VamsError),

    #[error("fixture store: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vams_core::{AgreementStatus, VendorType};
    use vams_policy::{validate_record, IdentifierRegistry};

    use crate::store::VendorStore;

    #[test]
    fn test_fixture_vendors_parse() {
        let vendors = vendors().unwrap();
        assert_eq!(vendors.len(), 2);
        let mitra = &vendors[0];
        assert_eq!(mitra.vendor_code().as_str(), "VND001");
        assert_eq!(mitra.vendor_name, "PT Mitra Sejahtera");
        assert_eq!(mitra.vendor_type, Some(VendorType::Corporation));
        assert_eq!(
            mitra.coverage("DKI Jakarta", "Jakarta Selatan").unwrap().districts,
            ["Tebet", "Setiabudi"]
        );
        assert_eq!(vendors[1].vendor_type, Some(VendorType::IndividualEntrepreneur));
        assert_eq!(vendors[1].agreements.len(), 2);
    }

    #[test]
    fn test_fixture_vendors_are_complete_existing_records() {
        let registry = registry();
        for vendor in vendors().unwrap() {
            let report = validate_record(&vendor, false, &registry);
            assert!(report.is_valid(), "{}: {report}", vendor.vendor_code());
        }
    }

    #[test]
    fn test_fixture_registry() {
        let registry = registry();
        assert!(REGISTERED_NPWPS.iter().all(|n| registry.exists(n)));
    }

    #[test]
    fn test_fixture_store_lists_newest_first() {
        let store = store().unwrap();
        let codes: Vec<String> = store
            .list()
            .iter()
            .map(|v| v.vendor_code().to_string())
            .collect();
        assert_eq!(codes, ["VND001", "VND002"]);
    }

    #[test]
    fn test_fixture_statuses_on_listing_date() {
        let vendors = vendors().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let statuses: Vec<AgreementStatus> = vendors
            .iter()
            .flat_map(|v| v.agreements.iter().map(move |a| a.status_on(today)))
            .collect();
        assert_eq!(
            statuses,
            [AgreementStatus::Active, AgreementStatus::Active, AgreementStatus::Inactive]
        );
    }
}
