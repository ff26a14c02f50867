//! # Save-Time Validation
//!
//! Checks a vendor record against the mandatory-field table and the
//! cross-record rules, accumulating every violation into one
//! [`ValidationReport`].
//!
//! ## Rule order
//!
//! 1. General fields (name, contact, emails, regional coverage, address,
//!    phone, vendor type).
//! 2. Bank fields.
//! 3. Legal/admin documents required by the vendor type.
//! 4. Percentage range (PPN, service charge, PB1 within 0–100 when set).
//! 5. NPWP uniqueness against the registry (new vendors only).
//! 6. At least one agreement.
//!
//! Regional coverage that is present but malformed (an entry without
//! districts, a repeated (province, city) pair, or a repeated district) is
//! reported as `(regionalCoverages, invalid)`. Records built by the coverage
//! editor never trip this; records read from files can.
//!
//! File-presence checks apply only to new vendors. A text value made of
//! whitespace counts as missing. Without a vendor type, step 3 is skipped
//! and `(vendorType, Missing)` is reported.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use vams_core::{FieldKey, RegionalCoverage, VendorRecord, VendorType};

use crate::mandatory::{required_documents, MandatoryTable, BANK_FIELDS, GENERAL_FIELDS};
use crate::registry::IdentifierRegistry;

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// A required value or file was not supplied.
    Missing,
    /// The identifier is already registered to another vendor.
    Duplicate,
    /// A required collection has no elements.
    Empty,
    /// A percentage lies outside 0–100.
    OutOfRange,
    /// A value is present but structurally malformed.
    Invalid,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Duplicate => "duplicate",
            Self::Empty => "empty",
            Self::OutOfRange => "outOfRange",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(field, rule)` violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub field: FieldKey,
    pub rule: Rule,
}

impl Violation {
    pub fn new(field: FieldKey, rule: Rule) -> Self {
        Self { field, rule }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.rule)
    }
}

/// Ordered collection of violations. Empty means the record may be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Alias of [`is_empty`](Self::is_empty) that reads better at call sites.
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether the report holds this exact `(field, rule)` pair.
    pub fn contains(&self, field: FieldKey, rule: Rule) -> bool {
        self.violations.contains(&Violation::new(field, rule))
    }

    /// Whether any violation names `field`.
    pub fn mentions(&self, field: FieldKey) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }

    fn push(&mut self, field: FieldKey, rule: Rule) {
        self.violations.push(Violation::new(field, rule));
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Validate `record` as a vendor of `vendor_type`.
///
/// `vendor_type` is passed separately so the caller can validate against
/// the type currently selected in the form.
pub fn validate(
    record: &VendorRecord,
    vendor_type: Option<VendorType>,
    is_new_vendor: bool,
    registry: &dyn IdentifierRegistry,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for &field in GENERAL_FIELDS {
        match field {
            FieldKey::Agreements => {}
            FieldKey::VendorType => {
                if vendor_type.is_none() {
                    report.push(field, Rule::Missing);
                }
            }
            FieldKey::RegionalCoverages if !record.regional_coverages.is_empty() => {
                if !coverage_is_well_formed(&record.regional_coverages) {
                    report.push(field, Rule::Invalid);
                }
            }
            _ => check_presence(record, field, is_new_vendor, &mut report),
        }
    }

    for &field in BANK_FIELDS {
        check_presence(record, field, is_new_vendor, &mut report);
    }

    if let Some(vendor_type) = vendor_type {
        let table = MandatoryTable::global();
        for kind in required_documents(vendor_type) {
            for field in kind.fields() {
                if table.is_mandatory(field, vendor_type) {
                    check_presence(record, field, is_new_vendor, &mut report);
                }
            }
        }
    }

    for (field, value) in [
        (FieldKey::Ppn, record.tax.ppn),
        (FieldKey::ServiceCharge, record.tax.service_charge),
        (FieldKey::Pb1, record.tax.pb1),
    ] {
        if value.is_some_and(|v| !is_percentage(v)) {
            report.push(field, Rule::OutOfRange);
        }
    }

    if is_new_vendor {
        if let Some(npwp) = record.npwp() {
            if registry.exists(npwp) {
                report.push(FieldKey::NpwpNumber, Rule::Duplicate);
            }
        }
    }

    if record.agreements.is_empty() {
        report.push(FieldKey::Agreements, Rule::Empty);
    }

    report
}

/// Validate `record` against its own vendor type.
pub fn validate_record(
    record: &VendorRecord,
    is_new_vendor: bool,
    registry: &dyn IdentifierRegistry,
) -> ValidationReport {
    validate(record, record.vendor_type, is_new_vendor, registry)
}

/// Whether `field` holds a value on `record`. Blank text does not count.
pub fn is_present(record: &VendorRecord, field: FieldKey) -> bool {
    if let Some(kind) = field.document() {
        let slot = record.documents.slot(kind);
        return if field.is_file() {
            slot.has_file()
        } else {
            slot.has_number()
        };
    }
    match field {
        FieldKey::VendorName => filled(&record.vendor_name),
        FieldKey::PicName => filled(&record.pic_name),
        FieldKey::Email1 => filled(&record.email1),
        FieldKey::Email2 => filled(&record.email2),
        FieldKey::RegionalCoverages => !record.regional_coverages.is_empty(),
        FieldKey::Address => filled(&record.address),
        FieldKey::Phone => filled(&record.phone),
        FieldKey::VendorType => record.vendor_type.is_some(),
        FieldKey::BankName => filled(&record.bank.bank_name),
        FieldKey::BankAccountName => filled(&record.bank.account_name),
        FieldKey::BankAccountNumber => filled(&record.bank.account_number),
        FieldKey::BankFile => record
            .bank
            .document
            .as_ref()
            .is_some_and(|f| filled(f.name())),
        FieldKey::Ppn => record.tax.ppn.is_some(),
        FieldKey::ServiceCharge => record.tax.service_charge.is_some(),
        FieldKey::Pb1 => record.tax.pb1.is_some(),
        FieldKey::PaymentMethod => record.tax.payment_method.is_some(),
        FieldKey::Agreements => !record.agreements.is_empty(),
        // Document fields are resolved through their slot above.
        _ => false,
    }
}

fn check_presence(
    record: &VendorRecord,
    field: FieldKey,
    is_new_vendor: bool,
    report: &mut ValidationReport,
) {
    if field.is_file() && !is_new_vendor {
        return;
    }
    if !is_present(record, field) {
        let rule = match field {
            FieldKey::RegionalCoverages | FieldKey::Agreements => Rule::Empty,
            _ => Rule::Missing,
        };
        report.push(field, rule);
    }
}

/// No empty entry, no repeated (province, city) pair, no repeated district.
fn coverage_is_well_formed(coverages: &[RegionalCoverage]) -> bool {
    let mut pairs = HashSet::new();
    coverages.iter().all(|entry| {
        let mut districts = HashSet::new();
        !entry.districts.is_empty()
            && pairs.insert((entry.province.as_str(), entry.city.as_str()))
            && entry.districts.iter().all(|d| districts.insert(d.as_str()))
    })
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn is_percentage(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::StaticRegistry;
    use chrono::NaiveDate;
    use vams_core::{
        Agreement, AgreementField, AgreementId, DocumentKind, FileRef, RegionalCoverage,
    };

    const REGISTERED_NPWP: &str = "12.345.678.9-012.000";

    fn registry() -> StaticRegistry {
        StaticRegistry::new([REGISTERED_NPWP, "98.765.432.1-321.000"])
    }

    fn fill_document(record: &mut VendorRecord, kind: DocumentKind, number: &str) {
        let slot = record.documents.slot_mut(kind);
        if kind.number_field().is_some() {
            slot.number = number.to_string();
        }
        slot.file = Some(FileRef::new(format!("{}.pdf", kind.as_str())));
    }

    /// A complete Corporation record that passes validation as a new vendor.
    fn complete_corporation() -> VendorRecord {
        let mut r = VendorRecord::new_draft();
        r.vendor_name = "PT Nusantara Logistik".into();
        r.pic_name = "Dewi Lestari".into();
        r.email1 = "ops@nusantara.co.id".into();
        r.email2 = "finance@nusantara.co.id".into();
        r.address = "Jl. Gatot Subroto No. 8".into();
        r.phone = "+62 21 5550101".into();
        r.vendor_type = Some(VendorType::Corporation);
        r.regional_coverages = vec![RegionalCoverage {
            province: "Bali".into(),
            city: "Badung".into(),
            districts: vec!["Kuta".into()],
        }];
        fill_document(&mut r, DocumentKind::Npwp, "01.234.567.8-901.000");
        fill_document(&mut r, DocumentKind::Sppkp, "SPPKP-77");
        fill_document(&mut r, DocumentKind::Nib, "9120001234567");
        r.bank.bank_name = "Bank Central Asia".into();
        r.bank.account_name = "PT Nusantara Logistik".into();
        r.bank.account_number = "5270123456".into();
        r.bank.document = Some(FileRef::new("bank_statement.pdf"));
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        r.agreements = vec![Agreement::new(AgreementId::new())
            .with(AgreementField::DocumentNumber("AGR-2026-010".into()), today)];
        r
    }

    #[test]
    fn test_complete_corporation_is_valid() {
        let report = validate_record(&complete_corporation(), true, &registry());
        assert!(report.is_valid(), "unexpected violations:\n{report}");
    }

    #[test]
    fn test_empty_draft_reports_in_order() {
        let r = VendorRecord::new_draft();
        let report = validate_record(&r, true, &registry());
        let fields: Vec<FieldKey> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            [
                FieldKey::VendorName,
                FieldKey::PicName,
                FieldKey::Email1,
                FieldKey::Email2,
                FieldKey::RegionalCoverages,
                FieldKey::Address,
                FieldKey::Phone,
                FieldKey::BankName,
                FieldKey::BankAccountName,
                FieldKey::BankAccountNumber,
                FieldKey::BankFile,
                FieldKey::NpwpNumber,
                FieldKey::NpwpFile,
                FieldKey::SppkpNumber,
                FieldKey::SppkpFile,
                FieldKey::NibNumber,
                FieldKey::NibFile,
                FieldKey::Agreements,
            ]
        );
        assert!(report.contains(FieldKey::RegionalCoverages, Rule::Empty));
        assert!(report.contains(FieldKey::Agreements, Rule::Empty));
    }

    fn entry(province: &str, city: &str, districts: &[&str]) -> RegionalCoverage {
        RegionalCoverage {
            province: province.into(),
            city: city.into(),
            districts: districts.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn coverage_report(coverages: Vec<RegionalCoverage>) -> ValidationReport {
        let mut r = complete_corporation();
        r.regional_coverages = coverages;
        validate_record(&r, false, &registry())
    }

    #[test]
    fn test_coverage_entry_without_districts_is_invalid() {
        let report = coverage_report(vec![entry("Bali", "Badung", &[])]);
        assert_eq!(
            report.into_inner(),
            [Violation::new(FieldKey::RegionalCoverages, Rule::Invalid)]
        );
    }

    #[test]
    fn test_repeated_coverage_pair_is_invalid() {
        let report = coverage_report(vec![
            entry("Bali", "Badung", &["Kuta"]),
            entry("Bali", "Badung", &["Mengwi"]),
        ]);
        assert!(report.contains(FieldKey::RegionalCoverages, Rule::Invalid));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_repeated_district_is_invalid() {
        let report = coverage_report(vec![entry("Bali", "Badung", &["Kuta", "Kuta"])]);
        assert!(report.contains(FieldKey::RegionalCoverages, Rule::Invalid));
    }

    #[test]
    fn test_well_formed_coverage_passes() {
        let report = coverage_report(vec![
            entry("Bali", "Badung", &["Kuta", "Mengwi"]),
            entry("Bali", "Denpasar", &["Denpasar Barat"]),
            entry("Jawa Barat", "Badung", &["Kuta"]),
        ]);
        assert!(report.is_valid(), "{report}");
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut r = complete_corporation();
        r.vendor_name = "   ".into();
        r.documents.nib.number = "\t".into();
        let report = validate_record(&r, true, &registry());
        assert_eq!(
            report.violations(),
            [
                Violation::new(FieldKey::VendorName, Rule::Missing),
                Violation::new(FieldKey::NibNumber, Rule::Missing),
            ]
        );
    }

    #[test]
    fn test_individual_entrepreneur_missing_npwp_file() {
        let mut r = complete_corporation();
        r.vendor_type = Some(VendorType::IndividualEntrepreneur);
        fill_document(&mut r, DocumentKind::Ktp, "3174012345670001");
        r.documents.npwp.file = None;
        let report = validate_record(&r, true, &registry());
        assert!(report.contains(FieldKey::NpwpFile, Rule::Missing));
        assert!(!report.mentions(FieldKey::SppkpNumber));
        assert!(!report.mentions(FieldKey::SppkpFile));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_individual_entrepreneur_requires_ktp() {
        let mut r = complete_corporation();
        r.vendor_type = Some(VendorType::IndividualEntrepreneur);
        let report = validate_record(&r, true, &registry());
        assert_eq!(
            report.violations(),
            [
                Violation::new(FieldKey::KtpNumber, Rule::Missing),
                Violation::new(FieldKey::KtpFile, Rule::Missing),
            ]
        );
    }

    #[test]
    fn test_overseas_requires_every_slot() {
        let mut r = complete_corporation();
        r.vendor_type = Some(VendorType::OverseasCorporation);
        let report = validate_record(&r, true, &registry());
        // NPWP, SPPKP, NIB already filled: 8 remaining slots, 7 with numbers.
        assert_eq!(report.len(), 8 * 2 - 1);
        assert!(report.contains(FieldKey::OtherLicenseFile, Rule::Missing));
        assert!(!report.mentions(FieldKey::NpwpNumber));

        for kind in DocumentKind::all() {
            fill_document(&mut r, *kind, "X-1");
        }
        assert!(validate_record(&r, true, &registry()).is_valid());
    }

    #[test]
    fn test_file_checks_skipped_for_existing_vendor() {
        let mut r = complete_corporation();
        r.vendor_type = Some(VendorType::OverseasCorporation);
        r.bank.document = None;
        for kind in DocumentKind::all() {
            r.documents.slot_mut(*kind).file = None;
        }
        let report = validate_record(&r, false, &registry());
        assert!(report.violations().iter().all(|v| !v.field.is_file()));
        assert!(report.contains(FieldKey::KtpNumber, Rule::Missing));

        let report = validate_record(&r, true, &registry());
        assert!(report.contains(FieldKey::BankFile, Rule::Missing));
        assert!(report.contains(FieldKey::NpwpFile, Rule::Missing));
    }

    #[test]
    fn test_duplicate_npwp_for_new_vendor_only() {
        let mut r = complete_corporation();
        r.documents.npwp.number = REGISTERED_NPWP.into();
        let report = validate_record(&r, true, &registry());
        assert_eq!(
            report.violations(),
            [Violation::new(FieldKey::NpwpNumber, Rule::Duplicate)]
        );
        assert!(validate_record(&r, false, &registry()).is_valid());
    }

    #[test]
    fn test_duplicate_check_trims() {
        let mut r = complete_corporation();
        r.documents.npwp.number = format!("  {REGISTERED_NPWP} ");
        let report = validate_record(&r, true, &registry());
        assert!(report.contains(FieldKey::NpwpNumber, Rule::Duplicate));
    }

    #[test]
    fn test_no_vendor_type_runs_only_type_independent_rules() {
        let mut r = complete_corporation();
        r.vendor_type = None;
        r.documents = Default::default();
        r.bank.bank_name.clear();
        let report = validate_record(&r, true, &registry());
        assert_eq!(
            report.violations(),
            [
                Violation::new(FieldKey::VendorType, Rule::Missing),
                Violation::new(FieldKey::BankName, Rule::Missing),
            ]
        );
    }

    #[test]
    fn test_explicit_type_overrides_record_type() {
        let r = complete_corporation();
        let report = validate(&r, Some(VendorType::IndividualEntrepreneur), true, &registry());
        assert!(report.contains(FieldKey::KtpNumber, Rule::Missing));
    }

    #[test]
    fn test_percentage_range() {
        let mut r = complete_corporation();
        r.tax.ppn = Some(Decimal::new(11, 0));
        r.tax.service_charge = Some(Decimal::new(-5, 1));
        r.tax.pb1 = Some(Decimal::new(1001, 1));
        let report = validate_record(&r, true, &registry());
        assert_eq!(
            report.violations(),
            [
                Violation::new(FieldKey::ServiceCharge, Rule::OutOfRange),
                Violation::new(FieldKey::Pb1, Rule::OutOfRange),
            ]
        );

        r.tax.service_charge = Some(Decimal::ZERO);
        r.tax.pb1 = Some(Decimal::ONE_HUNDRED);
        assert!(validate_record(&r, true, &registry()).is_valid());
    }

    #[test]
    fn test_missing_agreements_reported_last() {
        let mut r = complete_corporation();
        r.agreements.clear();
        r.documents.npwp.number = REGISTERED_NPWP.into();
        let report = validate_record(&r, true, &registry());
        assert_eq!(
            report.violations(),
            [
                Violation::new(FieldKey::NpwpNumber, Rule::Duplicate),
                Violation::new(FieldKey::Agreements, Rule::Empty),
            ]
        );
    }

    #[test]
    fn test_report_display_and_wire_format() {
        let mut r = complete_corporation();
        r.phone.clear();
        r.agreements.clear();
        let report = validate_record(&r, true, &registry());
        assert_eq!(report.to_string(), "phone: missing\nagreements: empty");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"field": "phone", "rule": "missing"},
                {"field": "agreements", "rule": "empty"}
            ])
        );
    }
}
