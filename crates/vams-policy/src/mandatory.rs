//! # Mandatory-Field Table
//!
//! Maps each [`VendorType`] to the set of [`FieldKey`]s a record of that type
//! must supply. The table is built once and shared.
//!
//! | Vendor type              | Required legal documents (number + file) |
//! |--------------------------|------------------------------------------|
//! | Corporation              | NPWP, SPPKP/Non-PKP, NIB                 |
//! | Individual Entrepreneur  | KTP, NPWP, SPPKP/Non-PKP, NIB            |
//! | Overseas Corporation     | every document slot                      |
//!
//! General fields and bank fields are required for every type.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use vams_core::{DocumentKind, FieldKey, VendorType};

/// General fields required regardless of vendor type, in form order.
pub const GENERAL_FIELDS: &[FieldKey] = &[
    FieldKey::VendorName,
    FieldKey::PicName,
    FieldKey::Email1,
    FieldKey::Email2,
    FieldKey::RegionalCoverages,
    FieldKey::Address,
    FieldKey::Phone,
    FieldKey::VendorType,
    FieldKey::Agreements,
];

/// Bank fields required regardless of vendor type, in form order.
pub const BANK_FIELDS: &[FieldKey] = &[
    FieldKey::BankName,
    FieldKey::BankAccountName,
    FieldKey::BankAccountNumber,
    FieldKey::BankFile,
];

/// Document slots a vendor type must fill, in validation order.
pub fn required_documents(vendor_type: VendorType) -> &'static [DocumentKind] {
    match vendor_type {
        VendorType::Corporation => &[DocumentKind::Npwp, DocumentKind::Sppkp, DocumentKind::Nib],
        VendorType::IndividualEntrepreneur => &[
            DocumentKind::Ktp,
            DocumentKind::Npwp,
            DocumentKind::Sppkp,
            DocumentKind::Nib,
        ],
        VendorType::OverseasCorporation => DocumentKind::all(),
    }
}

/// Per-type sets of mandatory field keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MandatoryTable {
    by_type: BTreeMap<VendorType, BTreeSet<FieldKey>>,
}

impl MandatoryTable {
    /// Build the standard table.
    pub fn standard() -> Self {
        let by_type = VendorType::all()
            .iter()
            .map(|&vendor_type| {
                let fields = GENERAL_FIELDS
                    .iter()
                    .chain(BANK_FIELDS)
                    .copied()
                    .chain(
                        required_documents(vendor_type)
                            .iter()
                            .flat_map(|kind| kind.fields()),
                    )
                    .collect();
                (vendor_type, fields)
            })
            .collect();
        Self { by_type }
    }

    /// The process-wide table, built on first use.
    pub fn global() -> &'static MandatoryTable {
        static TABLE: OnceLock<MandatoryTable> = OnceLock::new();
        TABLE.get_or_init(Self::standard)
    }

    /// The mandatory fields of a vendor type.
    pub fn fields(&self, vendor_type: VendorType) -> Option<&BTreeSet<FieldKey>> {
        self.by_type.get(&vendor_type)
    }

    pub fn is_mandatory(&self, field: FieldKey, vendor_type: VendorType) -> bool {
        self.fields(vendor_type)
            .is_some_and(|fields| fields.contains(&field))
    }
}

impl Default for MandatoryTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Whether `field` must be supplied for a vendor of `vendor_type`.
pub fn is_mandatory(field: FieldKey, vendor_type: VendorType) -> bool {
    MandatoryTable::global().is_mandatory(field, vendor_type)
}
