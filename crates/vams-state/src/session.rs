//! # Edit Session Reducer
//!
//! A vendor record open for editing is an immutable [`EditSession`]
//! snapshot. Every user action is a [`SessionEvent`], and
//! [`reduce`] maps `(session, event)` to the next snapshot:
//!
//! ```text
//! EditSession ──(SessionEvent, ReduceContext)──▶ EditSession
//! ```
//!
//! The context carries what the reducer reads but never changes: the
//! location hierarchy and today's date (for agreement status derivation).
//!
//! No event touches the vendor code, the record id or the creation time.
//!
//! Events that cannot apply leave the snapshot unchanged:
//! - `AddCoverage` with an incomplete selection, a district outside the
//!   hierarchy, or a district already covered.
//! - Agreement events naming an unknown agreement id.
//! - `SetDocumentNumber` for the file-only other-license slot.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vams_core::{
    AgreementField, AgreementId, DocumentKind, FileRef, LocationHierarchy, PaymentMethod,
    VendorRecord, VendorType,
};

use crate::agreements;
use crate::coverage::{self, CoverageEditor, CoverageSelection, DistrictChoice};

// ─── Events ──────────────────────────────────────────────────────────

/// A discrete edit made through the vendor form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum SessionEvent {
    SetVendorName { value: String },
    SetPicName { value: String },
    SetEmail1 { value: String },
    SetEmail2 { value: String },
    SetAddress { value: String },
    SetPhone { value: String },
    SetVendorType { value: Option<VendorType> },

    SetDocumentNumber { kind: DocumentKind, number: String },
    AttachDocument { kind: DocumentKind, file: Option<FileRef> },

    SetBankName { value: String },
    SetBankAccountName { value: String },
    SetBankAccountNumber { value: String },
    AttachBankDocument { file: Option<FileRef> },

    SetPpn { value: Option<Decimal> },
    SetServiceCharge { value: Option<Decimal> },
    SetPb1 { value: Option<Decimal> },
    SetPaymentMethod { value: Option<PaymentMethod> },

    SelectProvince { province: String },
    SelectCity { city: String },
    SelectDistrict { district: String },
    /// Add the pending district selection to the coverage set.
    AddCoverage,
    RemoveDistrict { province: String, city: String, district: String },
    RemoveCoverage { province: String, city: String },

    AddAgreement { id: AgreementId },
    RemoveAgreement { id: AgreementId },
    UpdateAgreement { id: AgreementId, field: AgreementField },
}

impl SessionEvent {
    /// `AddAgreement` with a freshly generated identifier.
    pub fn add_agreement() -> Self {
        Self::AddAgreement {
            id: AgreementId::new(),
        }
    }

    /// Short event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetVendorName { .. } => "set_vendor_name",
            Self::SetPicName { .. } => "set_pic_name",
            Self::SetEmail1 { .. } => "set_email1",
            Self::SetEmail2 { .. } => "set_email2",
            Self::SetAddress { .. } => "set_address",
            Self::SetPhone { .. } => "set_phone",
            Self::SetVendorType { .. } => "set_vendor_type",
            Self::SetDocumentNumber { .. } => "set_document_number",
            Self::AttachDocument { .. } => "attach_document",
            Self::SetBankName { .. } => "set_bank_name",
            Self::SetBankAccountName { .. } => "set_bank_account_name",
            Self::SetBankAccountNumber { .. } => "set_bank_account_number",
            Self::AttachBankDocument { .. } => "attach_bank_document",
            Self::SetPpn { .. } => "set_ppn",
            Self::SetServiceCharge { .. } => "set_service_charge",
            Self::SetPb1 { .. } => "set_pb1",
            Self::SetPaymentMethod { .. } => "set_payment_method",
            Self::SelectProvince { .. } => "select_province",
            Self::SelectCity { .. } => "select_city",
            Self::SelectDistrict { .. } => "select_district",
            Self::AddCoverage => "add_coverage",
            Self::RemoveDistrict { .. } => "remove_district",
            Self::RemoveCoverage { .. } => "remove_coverage",
            Self::AddAgreement { .. } => "add_agreement",
            Self::RemoveAgreement { .. } => "remove_agreement",
            Self::UpdateAgreement { .. } => "update_agreement",
        }
    }
}

// ─── Context ─────────────────────────────────────────────────────────

/// Read-only inputs to the reducer.
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext<'h> {
    pub hierarchy: &'h LocationHierarchy,
    /// Calendar date used to derive agreement status.
    pub today: NaiveDate,
}

impl<'h> ReduceContext<'h> {
    pub fn new(hierarchy: &'h LocationHierarchy, today: NaiveDate) -> Self {
        Self { hierarchy, today }
    }
}

// ─── Session ─────────────────────────────────────────────────────────

/// Snapshot of a vendor record being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    record: VendorRecord,
    is_new: bool,
    selection: CoverageSelection,
}

impl EditSession {
    /// Start registering a new vendor now.
    pub fn new_vendor() -> Self {
        Self::new_vendor_at(Utc::now())
    }

    /// Start registering a new vendor at `instant` (fixes the vendor code).
    pub fn new_vendor_at(instant: DateTime<Utc>) -> Self {
        Self {
            record: VendorRecord::new_draft_at(instant),
            is_new: true,
            selection: CoverageSelection::new(),
        }
    }

    /// Open a stored record for editing, re-deriving agreement statuses.
    pub fn open(mut record: VendorRecord, today: NaiveDate) -> Self {
        record.refresh_agreement_statuses(today);
        Self {
            record,
            is_new: false,
            selection: CoverageSelection::new(),
        }
    }

    pub fn record(&self) -> &VendorRecord {
        &self.record
    }

    /// Consume the session, yielding the edited record.
    pub fn into_record(self) -> VendorRecord {
        self.record
    }

    /// Whether this session registers a new vendor (vs. edits a stored one).
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn selection(&self) -> &CoverageSelection {
        &self.selection
    }

    /// Districts the picker should offer for the pending province and city.
    pub fn offered_districts(&self, hierarchy: &LocationHierarchy) -> Vec<DistrictChoice> {
        match (self.selection.province(), self.selection.city()) {
            (Some(province), Some(city)) => CoverageEditor::new(hierarchy).available_districts(
                &self.record.regional_coverages,
                province,
                city,
            ),
            _ => Vec::new(),
        }
    }

    /// Method form of [`reduce`].
    pub fn apply(&self, event: SessionEvent, ctx: &ReduceContext<'_>) -> Self {
        reduce(self, event, ctx)
    }
}

/// Compute the next snapshot.
pub fn reduce(session: &EditSession, event: SessionEvent, ctx: &ReduceContext<'_>) -> EditSession {
    let mut next = session.clone();
    let name = event.name();
    let record = &mut next.record;

    match event {
        SessionEvent::SetVendorName { value } => record.vendor_name = value,
        SessionEvent::SetPicName { value } => record.pic_name = value,
        SessionEvent::SetEmail1 { value } => record.email1 = value,
        SessionEvent::SetEmail2 { value } => record.email2 = value,
        SessionEvent::SetAddress { value } => record.address = value,
        SessionEvent::SetPhone { value } => record.phone = value,
        SessionEvent::SetVendorType { value } => record.vendor_type = value,

        SessionEvent::SetDocumentNumber { kind, number } => {
            if kind.number_field().is_none() {
                debug!(event = name, kind = %kind, "document kind has no number; ignored");
                return session.clone();
            }
            record.documents.slot_mut(kind).number = number;
        }
        SessionEvent::AttachDocument { kind, file } => record.documents.slot_mut(kind).file = file,

        SessionEvent::SetBankName { value } => record.bank.bank_name = value,
        SessionEvent::SetBankAccountName { value } => record.bank.account_name = value,
        SessionEvent::SetBankAccountNumber { value } => record.bank.account_number = value,
        SessionEvent::AttachBankDocument { file } => record.bank.document = file,

        SessionEvent::SetPpn { value } => record.tax.ppn = value,
        SessionEvent::SetServiceCharge { value } => record.tax.service_charge = value,
        SessionEvent::SetPb1 { value } => record.tax.pb1 = value,
        SessionEvent::SetPaymentMethod { value } => record.tax.payment_method = value,

        SessionEvent::SelectProvince { province } => {
            next.selection = session.selection.select_province(province);
        }
        SessionEvent::SelectCity { city } => {
            next.selection = session.selection.select_city(city);
        }
        SessionEvent::SelectDistrict { district } => {
            next.selection = session.selection.select_district(district);
        }
        SessionEvent::AddCoverage => {
            let editor = CoverageEditor::new(ctx.hierarchy);
            let Some(choice) = editor.choose_selection(&record.regional_coverages, &session.selection)
            else {
                debug!(event = name, selection = ?session.selection, "selection not addable; ignored");
                return session.clone();
            };
            record.regional_coverages = coverage::add_district(&record.regional_coverages, &choice);
            next.selection = session.selection.clear_district();
        }
        SessionEvent::RemoveDistrict {
            province,
            city,
            district,
        } => {
            record.regional_coverages =
                coverage::remove_district(&record.regional_coverages, &province, &city, &district);
        }
        SessionEvent::RemoveCoverage { province, city } => {
            record.regional_coverages =
                coverage::remove_entry(&record.regional_coverages, &province, &city);
        }

        SessionEvent::AddAgreement { id } => {
            if agreements::contains(&record.agreements, id) {
                debug!(event = name, agreement = %id, "agreement id already present; ignored");
                return session.clone();
            }
            record.agreements = agreements::add_agreement(&record.agreements, id);
        }
        SessionEvent::RemoveAgreement { id } => {
            if !agreements::contains(&record.agreements, id) {
                debug!(event = name, agreement = %id, "unknown agreement; ignored");
                return session.clone();
            }
            record.agreements = agreements::remove_agreement(&record.agreements, id);
        }
        SessionEvent::UpdateAgreement { id, field } => {
            if !agreements::contains(&record.agreements, id) {
                debug!(event = name, agreement = %id, "unknown agreement; ignored");
                return session.clone();
            }
            record.agreements = agreements::update_agreement(&record.agreements, id, field, ctx.today);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use vams_core::{AgreementStatus, VendorCode};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn run(session: EditSession, events: Vec<SessionEvent>) -> EditSession {
        let h = LocationHierarchy::indonesia();
        let ctx = ReduceContext::new(&h, today());
        events.into_iter().fold(session, |s, e| reduce(&s, e, &ctx))
    }

    fn select(province: &str, city: &str, district: &str) -> Vec<SessionEvent> {
        vec![
            SessionEvent::SelectProvince { province: province.into() },
            SessionEvent::SelectCity { city: city.into() },
            SessionEvent::SelectDistrict { district: district.into() },
        ]
    }

    // ── Identity ─────────────────────────────────────────────────────

    #[test]
    fn test_new_vendor_code_is_fixed_at_creation() {
        let instant = Utc.with_ymd_and_hms(2025, 12, 10, 11, 25, 40).unwrap();
        let session = EditSession::new_vendor_at(instant);
        assert!(session.is_new());
        let edited = run(
            session.clone(),
            vec![
                SessionEvent::SetVendorName { value: "PT Mitra".into() },
                SessionEvent::SetVendorType { value: Some(VendorType::OverseasCorporation) },
            ],
        );
        assert_eq!(edited.record().vendor_code(), &VendorCode::at(instant));
        assert_eq!(edited.record().id(), session.record().id());
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let session = EditSession::new_vendor();
        let h = LocationHierarchy::indonesia();
        let ctx = ReduceContext::new(&h, today());
        let next = reduce(&session, SessionEvent::SetPhone { value: "+62 21 1234567".into() }, &ctx);
        assert!(session.record().phone.is_empty());
        assert_eq!(next.record().phone, "+62 21 1234567");
    }

    // ── General fields ───────────────────────────────────────────────

    #[test]
    fn test_field_events_update_record() {
        let s = run(
            EditSession::new_vendor(),
            vec![
                SessionEvent::SetVendorName { value: "PT Mitra Sejahtera".into() },
                SessionEvent::SetPicName { value: "Budi Santoso".into() },
                SessionEvent::SetEmail1 { value: "contact@mitrasejahtera.com".into() },
                SessionEvent::SetEmail2 { value: "finance@mitrasejahtera.com".into() },
                SessionEvent::SetAddress { value: "Jl. Sudirman No. 123".into() },
                SessionEvent::SetBankName { value: "Bank Mandiri".into() },
                SessionEvent::SetPpn { value: Some(Decimal::new(11, 0)) },
                SessionEvent::SetPaymentMethod { value: Some(PaymentMethod::BankTransfer) },
            ],
        );
        let r = s.record();
        assert_eq!(r.pic_name, "Budi Santoso");
        assert_eq!(r.email2, "finance@mitrasejahtera.com");
        assert_eq!(r.bank.bank_name, "Bank Mandiri");
        assert_eq!(r.tax.ppn, Some(Decimal::new(11, 0)));
        assert_eq!(r.tax.payment_method, Some(PaymentMethod::BankTransfer));
    }

    #[test]
    fn test_document_events() {
        let s = run(
            EditSession::new_vendor(),
            vec![
                SessionEvent::SetDocumentNumber {
                    kind: DocumentKind::Npwp,
                    number: "12.345.678.9-012.000".into(),
                },
                SessionEvent::AttachDocument {
                    kind: DocumentKind::Npwp,
                    file: Some(FileRef::new("npwp_doc.pdf")),
                },
                SessionEvent::AttachBankDocument { file: Some(FileRef::new("bank_doc.pdf")) },
            ],
        );
        assert!(s.record().documents.npwp.has_number());
        assert!(s.record().documents.npwp.has_file());
        assert!(s.record().bank.document.is_some());
    }

    #[test]
    fn test_other_license_number_is_ignored() {
        let before = EditSession::new_vendor();
        let after = run(
            before.clone(),
            vec![SessionEvent::SetDocumentNumber {
                kind: DocumentKind::OtherLicense,
                number: "X-1".into(),
            }],
        );
        assert_eq!(after, before);
    }

    // ── Coverage ─────────────────────────────────────────────────────

    #[test]
    fn test_add_coverage_from_selection() {
        let mut events = select("DKI Jakarta", "Jakarta Selatan", "Tebet");
        events.push(SessionEvent::AddCoverage);
        events.push(SessionEvent::SelectDistrict { district: "Setiabudi".into() });
        events.push(SessionEvent::AddCoverage);
        let s = run(EditSession::new_vendor(), events);

        let cov = s.record().coverage("DKI Jakarta", "Jakarta Selatan").unwrap();
        assert_eq!(cov.districts, ["Tebet", "Setiabudi"]);
        assert_eq!(s.selection().city(), Some("Jakarta Selatan"));
        assert_eq!(s.selection().district(), None);
    }

    #[test]
    fn test_offered_districts_exclude_covered() {
        let mut events = select("Bali", "Badung", "Kuta");
        events.push(SessionEvent::AddCoverage);
        let s = run(EditSession::new_vendor(), events);
        let h = LocationHierarchy::indonesia();
        let offered: Vec<String> = s
            .offered_districts(&h)
            .iter()
            .map(|c| c.district().to_string())
            .collect();
        assert_eq!(offered, ["Kuta Utara", "Mengwi"]);
    }

    #[test]
    fn test_add_same_district_twice_is_ignored() {
        let mut events = select("Bali", "Badung", "Kuta");
        events.push(SessionEvent::AddCoverage);
        events.push(SessionEvent::SelectDistrict { district: "Kuta".into() });
        events.push(SessionEvent::AddCoverage);
        let s = run(EditSession::new_vendor(), events);
        assert_eq!(s.record().coverage("Bali", "Badung").unwrap().districts, ["Kuta"]);
    }

    #[test]
    fn test_add_coverage_with_incomplete_selection_is_ignored() {
        let events = vec![
            SessionEvent::SelectProvince { province: "Bali".into() },
            SessionEvent::AddCoverage,
        ];
        let s = run(EditSession::new_vendor(), events);
        assert!(s.record().regional_coverages.is_empty());
    }

    #[test]
    fn test_add_coverage_with_foreign_district_is_ignored() {
        let mut events = select("Bali", "Denpasar", "Kuta");
        events.push(SessionEvent::AddCoverage);
        let s = run(EditSession::new_vendor(), events);
        assert!(s.record().regional_coverages.is_empty());
    }

    #[test]
    fn test_remove_last_district_removes_entry() {
        let mut events = select("Bali", "Badung", "Kuta");
        events.push(SessionEvent::AddCoverage);
        events.push(SessionEvent::RemoveDistrict {
            province: "Bali".into(),
            city: "Badung".into(),
            district: "Kuta".into(),
        });
        let s = run(EditSession::new_vendor(), events);
        assert!(s.record().regional_coverages.is_empty());
    }

    #[test]
    fn test_remove_coverage_entry() {
        let mut events = select("Bali", "Badung", "Kuta");
        events.push(SessionEvent::AddCoverage);
        events.push(SessionEvent::SelectDistrict { district: "Mengwi".into() });
        events.push(SessionEvent::AddCoverage);
        events.push(SessionEvent::RemoveCoverage {
            province: "Bali".into(),
            city: "Badung".into(),
        });
        let s = run(EditSession::new_vendor(), events);
        assert!(s.record().regional_coverages.is_empty());
    }

    // ── Agreements ───────────────────────────────────────────────────

    #[test]
    fn test_agreement_lifecycle_events() {
        let id = AgreementId::new();
        let s = run(
            EditSession::new_vendor(),
            vec![
                SessionEvent::AddAgreement { id },
                SessionEvent::UpdateAgreement {
                    id,
                    field: AgreementField::StartDate("2025-01-01".into()),
                },
                SessionEvent::UpdateAgreement {
                    id,
                    field: AgreementField::EndDate("2026-12-31".into()),
                },
            ],
        );
        assert_eq!(s.record().agreements.len(), 1);
        assert_eq!(s.record().agreements[0].status(), AgreementStatus::Active);

        let s = run(s, vec![SessionEvent::RemoveAgreement { id }]);
        assert!(s.record().agreements.is_empty());
    }

    #[test]
    fn test_unknown_agreement_events_are_ignored() {
        let before = run(EditSession::new_vendor(), vec![SessionEvent::add_agreement()]);
        let stranger = AgreementId::new();
        let after = run(
            before.clone(),
            vec![
                SessionEvent::RemoveAgreement { id: stranger },
                SessionEvent::UpdateAgreement {
                    id: stranger,
                    field: AgreementField::DocumentNumber("AGR-9".into()),
                },
            ],
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_duplicate_agreement_id_is_ignored() {
        let id = AgreementId::new();
        let s = run(
            EditSession::new_vendor(),
            vec![SessionEvent::AddAgreement { id }, SessionEvent::AddAgreement { id }],
        );
        assert_eq!(s.record().agreements.len(), 1);
    }

    #[test]
    fn test_open_refreshes_statuses() {
        let id = AgreementId::new();
        let mut record = VendorRecord::new_draft();
        record.agreements = agreements::update_agreement(
            &agreements::update_agreement(
                &agreements::add_agreement(&[], id),
                id,
                AgreementField::StartDate("2024-01-01".into()),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            ),
            id,
            AgreementField::EndDate("2024-12-31".into()),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        assert!(record.agreements[0].status().is_active());

        let session = EditSession::open(record, today());
        assert!(!session.is_new());
        assert!(!session.record().agreements[0].status().is_active());
    }

    #[test]
    fn test_event_wire_format() {
        let e = SessionEvent::SelectProvince { province: "Bali".into() };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json, serde_json::json!({"event": "selectProvince", "province": "Bali"}));
        let back: SessionEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, e);
    }
}
