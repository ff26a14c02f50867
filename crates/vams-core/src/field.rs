//! # Field Keys: Single Vocabulary for Vendor Fields
//!
//! Defines `FieldKey`, one variant per vendor-record field that a validation
//! rule can name, and `DocumentKind`, one variant per legal/admin document
//! slot. The mandatory-field policy is a table over `FieldKey`; every `match`
//! on these enums is exhaustive, so adding a field forces every consumer to
//! handle it.
//!
//! Wire names are camelCase and match the record schema (`npwpNumber`,
//! `bankAccountNumber`, ...).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VamsError;

/// Every vendor-record field a validation rule can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    VendorName,
    PicName,
    Email1,
    Email2,
    RegionalCoverages,
    Address,
    Phone,
    VendorType,
    NpwpNumber,
    NpwpFile,
    SppkpNumber,
    SppkpFile,
    NibNumber,
    NibFile,
    KtpNumber,
    KtpFile,
    DeedNumber,
    DeedFile,
    SbuNumber,
    SbuFile,
    ConstructionNumber,
    ConstructionFile,
    LocalTaxRegNumber,
    LocalTaxRegFile,
    CorNumber,
    CorFile,
    GptcNumber,
    GptcFile,
    OtherLicenseFile,
    BankName,
    BankAccountName,
    BankAccountNumber,
    BankFile,
    Ppn,
    ServiceCharge,
    Pb1,
    PaymentMethod,
    Agreements,
}

/// Total number of field keys.
pub const FIELD_KEY_COUNT: usize = 38;

impl FieldKey {
    /// All field keys in record order.
    pub fn all() -> &'static [FieldKey] {
        &[
            Self::VendorName,
            Self::PicName,
            Self::Email1,
            Self::Email2,
            Self::RegionalCoverages,
            Self::Address,
            Self::Phone,
            Self::VendorType,
            Self::NpwpNumber,
            Self::NpwpFile,
            Self::SppkpNumber,
            Self::SppkpFile,
            Self::NibNumber,
            Self::NibFile,
            Self::KtpNumber,
            Self::KtpFile,
            Self::DeedNumber,
            Self::DeedFile,
            Self::SbuNumber,
            Self::SbuFile,
            Self::ConstructionNumber,
            Self::ConstructionFile,
            Self::LocalTaxRegNumber,
            Self::LocalTaxRegFile,
            Self::CorNumber,
            Self::CorFile,
            Self::GptcNumber,
            Self::GptcFile,
            Self::OtherLicenseFile,
            Self::BankName,
            Self::BankAccountName,
            Self::BankAccountNumber,
            Self::BankFile,
            Self::Ppn,
            Self::ServiceCharge,
            Self::Pb1,
            Self::PaymentMethod,
            Self::Agreements,
        ]
    }

    /// The camelCase identifier, identical to the serde name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VendorName => "vendorName",
            Self::PicName => "picName",
            Self::Email1 => "email1",
            Self::Email2 => "email2",
            Self::RegionalCoverages => "regionalCoverages",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::VendorType => "vendorType",
            Self::NpwpNumber => "npwpNumber",
            Self::NpwpFile => "npwpFile",
            Self::SppkpNumber => "sppkpNumber",
            Self::SppkpFile => "sppkpFile",
            Self::NibNumber => "nibNumber",
            Self::NibFile => "nibFile",
            Self::KtpNumber => "ktpNumber",
            Self::KtpFile => "ktpFile",
            Self::DeedNumber => "deedNumber",
            Self::DeedFile => "deedFile",
            Self::SbuNumber => "sbuNumber",
            Self::SbuFile => "sbuFile",
            Self::ConstructionNumber => "constructionNumber",
            Self::ConstructionFile => "constructionFile",
            Self::LocalTaxRegNumber => "localTaxRegNumber",
            Self::LocalTaxRegFile => "localTaxRegFile",
            Self::CorNumber => "corNumber",
            Self::CorFile => "corFile",
            Self::GptcNumber => "gptcNumber",
            Self::GptcFile => "gptcFile",
            Self::OtherLicenseFile => "otherLicenseFile",
            Self::BankName => "bankName",
            Self::BankAccountName => "bankAccountName",
            Self::BankAccountNumber => "bankAccountNumber",
            Self::BankFile => "bankFile",
            Self::Ppn => "ppn",
            Self::ServiceCharge => "serviceCharge",
            Self::Pb1 => "pb1",
            Self::PaymentMethod => "paymentMethod",
            Self::Agreements => "agreements",
        }
    }

    /// Display label used by the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VendorName => "Vendor Name",
            Self::PicName => "PIC Name",
            Self::Email1 => "Email 1",
            Self::Email2 => "Email 2",
            Self::RegionalCoverages => "Regional Coverage",
            Self::Address => "Address",
            Self::Phone => "Phone",
            Self::VendorType => "Vendor Type",
            Self::NpwpNumber => "NPWP Number",
            Self::NpwpFile => "NPWP File",
            Self::SppkpNumber => "SPPKP Number",
            Self::SppkpFile => "SPPKP/Non-PKP File",
            Self::NibNumber => "NIB Number",
            Self::NibFile => "NIB File",
            Self::KtpNumber => "KTP Number",
            Self::KtpFile => "KTP File",
            Self::DeedNumber => "Deed Number",
            Self::DeedFile => "Deed File",
            Self::SbuNumber => "SBU Number",
            Self::SbuFile => "SBU File",
            Self::ConstructionNumber => "Construction License",
            Self::ConstructionFile => "Construction License File",
            Self::LocalTaxRegNumber => "Local Tax Reg",
            Self::LocalTaxRegFile => "Local Tax Reg File",
            Self::CorNumber => "COR Number",
            Self::CorFile => "COR File",
            Self::GptcNumber => "GPTC Number",
            Self::GptcFile => "GPTC File",
            Self::OtherLicenseFile => "Other Business License File",
            Self::BankName => "Bank Name",
            Self::BankAccountName => "Bank Account Name",
            Self::BankAccountNumber => "Bank Account Number",
            Self::BankFile => "Bank Document File",
            Self::Ppn => "PPN",
            Self::ServiceCharge => "Service Charge",
            Self::Pb1 => "PB1",
            Self::PaymentMethod => "Payment Method",
            Self::Agreements => "Agreement",
        }
    }

    /// The document slot this field belongs to, if it is a legal/admin field.
    pub fn document(&self) -> Option<DocumentKind> {
        DocumentKind::all()
            .iter()
            .copied()
            .find(|kind| kind.number_field() == Some(*self) || kind.file_field() == *self)
    }

    /// Whether this key names an uploaded file rather than a typed value.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::BankFile) || self.document().is_some_and(|d| d.file_field() == *self)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = VamsError;

    /// Parse a field key from its camelCase identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| VamsError::unknown("field key", s))
    }
}

// ─── Document Kinds ──────────────────────────────────────────────────

/// The legal/admin document slots on a vendor record.
///
/// Each slot pairs an identifier number with an uploaded file, except
/// `OtherLicense`, which is a file only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    /// Taxpayer identification number.
    Npwp,
    /// VAT-collector registration (or Non-PKP statement).
    Sppkp,
    /// Business identification number.
    Nib,
    /// National identity card.
    Ktp,
    /// Notarial deed of establishment.
    Deed,
    /// Business-entity certification.
    Sbu,
    /// Construction business license.
    Construction,
    /// Business registration with the local tax office.
    LocalTaxReg,
    /// Certificate of owner's representative.
    Cor,
    Gptc,
    /// Any other business license.
    OtherLicense,
}

impl DocumentKind {
    /// All document kinds in form order.
    pub fn all() -> &'static [DocumentKind] {
        &[
            Self::Npwp,
            Self::Sppkp,
            Self::Nib,
            Self::Ktp,
            Self::Deed,
            Self::Sbu,
            Self::Construction,
            Self::LocalTaxReg,
            Self::Cor,
            Self::Gptc,
            Self::OtherLicense,
        ]
    }

    /// The field key of the identifier number, if the slot has one.
    pub fn number_field(&self) -> Option<FieldKey> {
        match self {
            Self::Npwp => Some(FieldKey::NpwpNumber),
            Self::Sppkp => Some(FieldKey::SppkpNumber),
            Self::Nib => Some(FieldKey::NibNumber),
            Self::Ktp => Some(FieldKey::KtpNumber),
            Self::Deed => Some(FieldKey::DeedNumber),
            Self::Sbu => Some(FieldKey::SbuNumber),
            Self::Construction => Some(FieldKey::ConstructionNumber),
            Self::LocalTaxReg => Some(FieldKey::LocalTaxRegNumber),
            Self::Cor => Some(FieldKey::CorNumber),
            Self::Gptc => Some(FieldKey::GptcNumber),
            Self::OtherLicense => None,
        }
    }

    /// The field key of the uploaded file.
    pub fn file_field(&self) -> FieldKey {
        match self {
            Self::Npwp => FieldKey::NpwpFile,
            Self::Sppkp => FieldKey::SppkpFile,
            Self::Nib => FieldKey::NibFile,
            Self::Ktp => FieldKey::KtpFile,
            Self::Deed => FieldKey::DeedFile,
            Self::Sbu => FieldKey::SbuFile,
            Self::Construction => FieldKey::ConstructionFile,
            Self::LocalTaxReg => FieldKey::LocalTaxRegFile,
            Self::Cor => FieldKey::CorFile,
            Self::Gptc => FieldKey::GptcFile,
            Self::OtherLicense => FieldKey::OtherLicenseFile,
        }
    }

    /// Both field keys of the slot: number (when present), then file.
    pub fn fields(&self) -> impl Iterator<Item = FieldKey> {
        self.number_field().into_iter().chain(std::iter::once(self.file_field()))
    }

    /// The camelCase identifier, identical to the serde name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Npwp => "npwp",
            Self::Sppkp => "sppkp",
            Self::Nib => "nib",
            Self::Ktp => "ktp",
            Self::Deed => "deed",
            Self::Sbu => "sbu",
            Self::Construction => "construction",
            Self::LocalTaxReg => "localTaxReg",
            Self::Cor => "cor",
            Self::Gptc => "gptc",
            Self::OtherLicense => "otherLicense",
        }
    }

    /// Section heading used by the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Npwp => "NPWP",
            Self::Sppkp => "SPPKP / Non PKP",
            Self::Nib => "NIB",
            Self::Ktp => "KTP",
            Self::Deed => "Notarial Deed of Establishment",
            Self::Sbu => "SBU (Sertifikat Badan Usaha)",
            Self::Construction => "Construction Business License",
            Self::LocalTaxReg => "Reg. Business in Local Tax",
            Self::Cor => "COR (Cert. of Owner's Rep)",
            Self::Gptc => "GPTC",
            Self::OtherLicense => "Other Business License",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = VamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| VamsError::unknown("document kind", s))
    }
}
