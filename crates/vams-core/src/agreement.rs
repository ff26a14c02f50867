//! # Agreements and Status Derivation
//!
//! An agreement's lifecycle status is not a state machine the user drives:
//! it is a pure function of the agreement's date range and the current
//! calendar date.
//!
//! ```text
//!            start                     end
//!   ───────────┼────────────────────────┼───────────▶ today
//!    Inactive  │         Active         │  Inactive
//!   (pending)  │  (inclusive bounds)    │  (expired)
//! ```
//!
//! Missing or unparseable dates yield `Inactive`. A reversed range
//! (`start > end`) admits no `today` and therefore also yields `Inactive`;
//! it is not treated as an error.
//!
//! `Agreement` keeps its fields private. Every edit goes through
//! [`Agreement::apply`], which re-derives the status when a date changes, so
//! the stored status cannot drift from the dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VamsError;
use crate::identity::{AgreementId, FileRef};
use crate::temporal::{parse_calendar_date, today_utc};

// ─── Status ──────────────────────────────────────────────────────────

/// Derived lifecycle status of an agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementStatus {
    /// Today falls within the agreement's date range.
    Active,
    /// Not yet started, expired, or dates incomplete.
    #[default]
    Inactive,
}

impl AgreementStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for AgreementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        })
    }
}

/// Derive status from parsed dates.
pub fn status_for_dates(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> AgreementStatus {
    match (start, end) {
        (Some(start), Some(end)) if start <= today && today <= end => AgreementStatus::Active,
        _ => AgreementStatus::Inactive,
    }
}

/// Derive status from date text as entered by the user.
///
/// `today` is a calendar date; callers holding an instant pass its date,
/// which discards the time of day.
pub fn compute_status(start: &str, end: &str, today: NaiveDate) -> AgreementStatus {
    status_for_dates(parse_calendar_date(start), parse_calendar_date(end), today)
}

// ─── Agreement Type ──────────────────────────────────────────────────

/// Contract category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgreementType {
    #[serde(rename = "Lease Agreement")]
    Lease,
    #[serde(rename = "Service Level Agreement")]
    ServiceLevel,
    #[serde(rename = "Supply Agreement")]
    Supply,
    /// Non-disclosure agreement.
    #[serde(rename = "NDA")]
    Nda,
}

impl AgreementType {
    pub fn all() -> &'static [AgreementType] {
        &[Self::Lease, Self::ServiceLevel, Self::Supply, Self::Nda]
    }

    /// Display label, identical to the serde name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Lease => "Lease Agreement",
            Self::ServiceLevel => "Service Level Agreement",
            Self::Supply => "Supply Agreement",
            Self::Nda => "NDA",
        }
    }
}

impl std::fmt::Display for AgreementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgreementType {
    type Err = VamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VamsError::unknown("agreement type", s))
    }
}

// ─── Agreement ───────────────────────────────────────────────────────

/// A single-field edit to an agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum AgreementField {
    DocumentNumber(String),
    AgreementType(Option<AgreementType>),
    StartDate(String),
    EndDate(String),
    File(Option<FileRef>),
}

impl AgreementField {
    /// Whether applying this edit requires the status to be re-derived.
    pub fn affects_status(&self) -> bool {
        matches!(self, Self::StartDate(_) | Self::EndDate(_))
    }
}

/// An agreement contract attached to a vendor.
///
/// `status` is written out but never read back: a loaded agreement derives
/// it from its dates for the current UTC day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredAgreement")]
pub struct Agreement {
    id: AgreementId,
    document_number: String,
    agreement_type: Option<AgreementType>,
    /// Raw date text, `YYYY-MM-DD` when well-formed.
    start_date: String,
    end_date: String,
    status: AgreementStatus,
    file: Option<FileRef>,
}

/// Wire shape of a stored agreement. A `status` key in the input is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAgreement {
    id: AgreementId,
    #[serde(default)]
    document_number: String,
    #[serde(default)]
    agreement_type: Option<AgreementType>,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
    #[serde(default)]
    file: Option<FileRef>,
}

impl From<StoredAgreement> for Agreement {
    fn from(stored: StoredAgreement) -> Self {
        let mut agreement = Self {
            id: stored.id,
            document_number: stored.document_number,
            agreement_type: stored.agreement_type,
            start_date: stored.start_date,
            end_date: stored.end_date,
            status: AgreementStatus::Inactive,
            file: stored.file,
        };
        agreement.refresh_status(today_utc());
        agreement
    }
}

impl Agreement {
    /// A new agreement with empty fields and status `Inactive`.
    pub fn new(id: AgreementId) -> Self {
        Self {
            id,
            document_number: String::new(),
            agreement_type: None,
            start_date: String::new(),
            end_date: String::new(),
            status: AgreementStatus::Inactive,
            file: None,
        }
    }

    /// Apply a single-field edit, re-deriving status when a date changed.
    pub fn apply(&mut self, field: AgreementField, today: NaiveDate) {
        let recompute = field.affects_status();
        match field {
            AgreementField::DocumentNumber(v) => self.document_number = v,
            AgreementField::AgreementType(v) => self.agreement_type = v,
            AgreementField::StartDate(v) => self.start_date = v,
            AgreementField::EndDate(v) => self.end_date = v,
            AgreementField::File(v) => self.file = v,
        }
        if recompute {
            self.refresh_status(today);
        }
    }

    /// Builder-style [`Agreement::apply`].
    pub fn with(mut self, field: AgreementField, today: NaiveDate) -> Self {
        self.apply(field, today);
        self
    }

    /// Re-derive the status for `today`.
    pub fn refresh_status(&mut self, today: NaiveDate) {
        self.status = self.status_on(today);
    }

    /// The status this agreement has on `today`, without storing it.
    pub fn status_on(&self, today: NaiveDate) -> AgreementStatus {
        compute_status(&self.start_date, &self.end_date, today)
    }

    pub fn id(&self) -> AgreementId {
        self.id
    }

    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn agreement_type(&self) -> Option<AgreementType> {
        self.agreement_type
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Status as of the last date edit or refresh.
    pub fn status(&self) -> AgreementStatus {
        self.status
    }

    pub fn file(&self) -> Option<&FileRef> {
        self.file.as_ref()
    }
}
