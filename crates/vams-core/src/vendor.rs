//! # Vendor Record Model
//!
//! The vendor master record: identity, classification, legal/admin
//! documents, banking, tax configuration, regional coverage and agreements.
//!
//! ## Invariants
//!
//! - `id`, `vendor_code` and `created_at` are fixed when the record is
//!   created ([`VendorRecord::new_draft`]) or restored from storage
//!   ([`VendorRecord::restore`] / deserialization). They are private and have
//!   no setters.
//! - Regional coverage should hold at most one entry per (province, city)
//!   pair, no empty entry and no repeated district. The coverage editor in
//!   `vams-state` keeps this by construction; deserialized records are not
//!   checked here, and the mandatory-field policy reports violations at save
//!   time.
//! - Agreement status is derived, including on deserialization; see
//!   [`crate::agreement`].
//!
//! A record may be incomplete while it is being edited. Completeness is
//! judged by the mandatory-field policy at save time, not by this type.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::agreement::Agreement;
use crate::error::VamsError;
use crate::field::DocumentKind;
use crate::identity::{FileRef, VendorCode, VendorId};
use crate::temporal::Timestamp;

// ─── Vendor Type ─────────────────────────────────────────────────────

/// Classification tag that drives the mandatory-field policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VendorType {
    /// Domestic incorporated company.
    Corporation,
    /// Sole proprietor.
    #[serde(rename = "Individual Entrepreneur", alias = "Individual Entrepreneurs")]
    IndividualEntrepreneur,
    /// Company incorporated abroad.
    #[serde(rename = "Overseas Corporation")]
    OverseasCorporation,
}

impl VendorType {
    /// All vendor types in form order.
    pub fn all() -> &'static [VendorType] {
        &[
            Self::Corporation,
            Self::IndividualEntrepreneur,
            Self::OverseasCorporation,
        ]
    }

    /// Display label, identical to the serde name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Corporation => "Corporation",
            Self::IndividualEntrepreneur => "Individual Entrepreneur",
            Self::OverseasCorporation => "Overseas Corporation",
        }
    }
}

impl std::fmt::Display for VendorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VendorType {
    type Err = VamsError;

    /// Accepts the display label (case-insensitive), the legacy plural
    /// "Individual Entrepreneurs", or a kebab-case form such as
    /// `overseas-corporation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', " ");
        match normalized.as_str() {
            "corporation" => Ok(Self::Corporation),
            "individual entrepreneur" | "individual entrepreneurs" => {
                Ok(Self::IndividualEntrepreneur)
            }
            "overseas corporation" => Ok(Self::OverseasCorporation),
            _ => Err(VamsError::unknown("vendor type", s)),
        }
    }
}

// ─── Payment Method ──────────────────────────────────────────────────

/// How the vendor is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Cash,
    Cheque,
    #[serde(rename = "E-Wallet")]
    EWallet,
}

impl PaymentMethod {
    /// All payment methods in form order.
    pub fn all() -> &'static [PaymentMethod] {
        &[Self::BankTransfer, Self::Cash, Self::Cheque, Self::EWallet]
    }

    /// Display label, identical to the serde name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank Transfer",
            Self::Cash => "Cash",
            Self::Cheque => "Cheque",
            Self::EWallet => "E-Wallet",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = VamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VamsError::unknown("payment method", s))
    }
}

// ─── Documents, Bank, Tax ────────────────────────────────────────────

/// An identifier number paired with an optional uploaded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSlot {
    /// Identifier number as entered. Empty when not supplied.
    pub number: String,
    /// Uploaded document, if any.
    pub file: Option<FileRef>,
}

impl DocumentSlot {
    /// Whether a non-blank number has been entered.
    pub fn has_number(&self) -> bool {
        !self.number.trim().is_empty()
    }

    /// Whether a document has been attached.
    pub fn has_file(&self) -> bool {
        self.file.as_ref().is_some_and(|f| !f.name().trim().is_empty())
    }
}

/// The legal/admin document slots of a vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegalDocuments {
    pub npwp: DocumentSlot,
    pub sppkp: DocumentSlot,
    pub nib: DocumentSlot,
    pub ktp: DocumentSlot,
    pub deed: DocumentSlot,
    pub sbu: DocumentSlot,
    pub construction: DocumentSlot,
    pub local_tax_reg: DocumentSlot,
    pub cor: DocumentSlot,
    pub gptc: DocumentSlot,
    /// File only; the number is never read.
    pub other_license: DocumentSlot,
}

impl LegalDocuments {
    /// The slot for a document kind.
    pub fn slot(&self, kind: DocumentKind) -> &DocumentSlot {
        match kind {
            DocumentKind::Npwp => &self.npwp,
            DocumentKind::Sppkp => &self.sppkp,
            DocumentKind::Nib => &self.nib,
            DocumentKind::Ktp => &self.ktp,
            DocumentKind::Deed => &self.deed,
            DocumentKind::Sbu => &self.sbu,
            DocumentKind::Construction => &self.construction,
            DocumentKind::LocalTaxReg => &self.local_tax_reg,
            DocumentKind::Cor => &self.cor,
            DocumentKind::Gptc => &self.gptc,
            DocumentKind::OtherLicense => &self.other_license,
        }
    }

    /// Mutable access to the slot for a document kind.
    pub fn slot_mut(&mut self, kind: DocumentKind) -> &mut DocumentSlot {
        match kind {
            DocumentKind::Npwp => &mut self.npwp,
            DocumentKind::Sppkp => &mut self.sppkp,
            DocumentKind::Nib => &mut self.nib,
            DocumentKind::Ktp => &mut self.ktp,
            DocumentKind::Deed => &mut self.deed,
            DocumentKind::Sbu => &mut self.sbu,
            DocumentKind::Construction => &mut self.construction,
            DocumentKind::LocalTaxReg => &mut self.local_tax_reg,
            DocumentKind::Cor => &mut self.cor,
            DocumentKind::Gptc => &mut self.gptc,
            DocumentKind::OtherLicense => &mut self.other_license,
        }
    }
}

/// Banking details for vendor payouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BankDetails {
    pub bank_name: String,
    /// Account holder name.
    pub account_name: String,
    pub account_number: String,
    /// Supporting document (account statement or book cover).
    pub document: Option<FileRef>,
}

/// Tax and fee percentages plus payment method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxConfig {
    /// Value-added tax rate, percent.
    pub ppn: Option<Decimal>,
    /// Service charge, percent.
    pub service_charge: Option<Decimal>,
    /// Regional restaurant/hospitality tax, percent.
    pub pb1: Option<Decimal>,
    pub payment_method: Option<PaymentMethod>,
}

// ─── Regional Coverage ───────────────────────────────────────────────

/// One (province, city) pairing with the districts the vendor serves there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalCoverage {
    pub province: String,
    pub city: String,
    /// District names, unique, in the order they were added.
    pub districts: Vec<String>,
}

impl RegionalCoverage {
    /// Whether this entry covers the given (province, city) pair.
    pub fn matches(&self, province: &str, city: &str) -> bool {
        self.province == province && self.city == city
    }

    /// Whether the district is already assigned in this entry.
    pub fn has_district(&self, district: &str) -> bool {
        self.districts.iter().any(|d| d == district)
    }
}

// ─── Vendor Record ───────────────────────────────────────────────────

/// The vendor master record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    id: VendorId,
    vendor_code: VendorCode,
    created_at: Timestamp,

    #[serde(default)]
    pub vendor_name: String,
    /// Contact person.
    #[serde(default)]
    pub pic_name: String,
    #[serde(default)]
    pub email1: String,
    #[serde(default)]
    pub email2: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub vendor_type: Option<VendorType>,
    #[serde(default)]
    pub documents: LegalDocuments,
    #[serde(default)]
    pub bank: BankDetails,
    #[serde(default)]
    pub tax: TaxConfig,

    #[serde(default)]
    pub regional_coverages: Vec<RegionalCoverage>,
    #[serde(default)]
    pub agreements: Vec<Agreement>,
}

impl VendorRecord {
    /// Create an empty record for a vendor being registered now.
    pub fn new_draft() -> Self {
        Self::new_draft_at(Utc::now())
    }

    /// Create an empty record for a vendor registered at `instant`.
    ///
    /// The vendor code is derived from `instant`. New drafts default to
    /// [`VendorType::Corporation`], matching the form's initial selection.
    pub fn new_draft_at(instant: DateTime<Utc>) -> Self {
        let mut record = Self::restore(
            VendorId::new(),
            VendorCode::at(instant),
            Timestamp::from_utc(instant),
        );
        record.vendor_type = Some(VendorType::Corporation);
        record
    }

    /// Rebuild an empty record around identity fields loaded from storage.
    pub fn restore(id: VendorId, vendor_code: VendorCode, created_at: Timestamp) -> Self {
        Self {
            id,
            vendor_code,
            created_at,
            vendor_name: String::new(),
            pic_name: String::new(),
            email1: String::new(),
            email2: String::new(),
            address: String::new(),
            phone: String::new(),
            vendor_type: None,
            documents: LegalDocuments::default(),
            bank: BankDetails::default(),
            tax: TaxConfig::default(),
            regional_coverages: Vec::new(),
            agreements: Vec::new(),
        }
    }

    pub fn id(&self) -> VendorId {
        self.id
    }

    pub fn vendor_code(&self) -> &VendorCode {
        &self.vendor_code
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// The NPWP number, trimmed. `None` when blank.
    pub fn npwp(&self) -> Option<&str> {
        let n = self.documents.npwp.number.trim();
        (!n.is_empty()).then_some(n)
    }

    /// The coverage entry for a (province, city) pair.
    pub fn coverage(&self, province: &str, city: &str) -> Option<&RegionalCoverage> {
        self.regional_coverages
            .iter()
            .find(|c| c.matches(province, city))
    }

    /// Re-derive every agreement's status for `today`.
    ///
    /// Called when a stored record is opened for editing, since a status
    /// persisted earlier may no longer hold.
    pub fn refresh_agreement_statuses(&mut self, today: NaiveDate) {
        for agreement in &mut self.agreements {
            agreement.refresh_status(today);
        }
    }
}
