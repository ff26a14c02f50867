//! # Agreement List
//!
//! The vendor agreement list is one row per (vendor, agreement) pair. A
//! vendor without agreements contributes no rows.
//!
//! ```text
//! vendors ──flatten──▶ rows ──filter(keyword, scope)──▶ rows ──paginate──▶ Page
//! ```
//!
//! Row status is derived for the listing date, not copied from the record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use vams_core::{
    AgreementId, AgreementStatus, AgreementType, Timestamp, VendorCode, VendorId, VendorRecord,
};

/// Page sizes offered by the list screen.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Errors from list queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("unsupported page size {0} (expected one of 10, 25, 50, 100)")]
    UnsupportedPageSize(usize),

    #[error("page numbers start at 1")]
    ZeroPage,

    #[error("unknown search scope: {0:?}")]
    UnknownScope(String),
}

// ─── Rows ────────────────────────────────────────────────────────────

/// One line of the agreement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementRow {
    pub vendor_id: VendorId,
    pub vendor_code: VendorCode,
    pub vendor_name: String,
    pub created_at: Timestamp,
    pub agreement_id: AgreementId,
    pub document_number: String,
    pub agreement_type: Option<AgreementType>,
    pub start_date: String,
    pub end_date: String,
    pub status: AgreementStatus,
    /// Distinct provinces the vendor covers, in coverage order.
    pub regions: Vec<String>,
}

/// One row per (vendor, agreement), vendors and agreements in input order.
pub fn flatten(vendors: &[VendorRecord], today: NaiveDate) -> Vec<AgreementRow> {
    vendors
        .iter()
        .flat_map(|vendor| {
            let regions = regions(vendor);
            vendor.agreements.iter().map(move |agreement| AgreementRow {
                vendor_id: vendor.id(),
                vendor_code: vendor.vendor_code().clone(),
                vendor_name: vendor.vendor_name.clone(),
                created_at: vendor.created_at(),
                agreement_id: agreement.id(),
                document_number: agreement.document_number().to_string(),
                agreement_type: agreement.agreement_type(),
                start_date: agreement.start_date().to_string(),
                end_date: agreement.end_date().to_string(),
                status: agreement.status_on(today),
                regions: regions.clone(),
            })
        })
        .collect()
}

fn regions(vendor: &VendorRecord) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for coverage in &vendor.regional_coverages {
        if !out.contains(&coverage.province) {
            out.push(coverage.province.clone());
        }
    }
    out
}

// ─── Search ──────────────────────────────────────────────────────────

/// Which column a keyword is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchScope {
    /// Vendor name, vendor code or agreement document number.
    #[default]
    All,
    VendorName,
    VendorCode,
    DocumentNumber,
}

impl SearchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::VendorName => "name",
            Self::VendorCode => "code",
            Self::DocumentNumber => "document",
        }
    }

    fn matches(&self, row: &AgreementRow, needle: &str) -> bool {
        let hit = |haystack: &str| haystack.to_lowercase().contains(needle);
        match self {
            Self::All => {
                hit(&row.vendor_name) || hit(row.vendor_code.as_str()) || hit(&row.document_number)
            }
            Self::VendorName => hit(&row.vendor_name),
            Self::VendorCode => hit(row.vendor_code.as_str()),
            Self::DocumentNumber => hit(&row.document_number),
        }
    }
}

impl std::fmt::Display for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "name" | "vendor-name" => Ok(Self::VendorName),
            "code" | "vendor-code" => Ok(Self::VendorCode),
            "document" | "document-number" => Ok(Self::DocumentNumber),
            _ => Err(ListingError::UnknownScope(s.to_string())),
        }
    }
}

/// Rows whose scoped column contains `keyword`, case-insensitively.
///
/// A blank keyword keeps every row.
pub fn filter(rows: &[AgreementRow], keyword: &str, scope: SearchScope) -> Vec<AgreementRow> {
    let needle = keyword.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| scope.matches(row, &needle))
        .cloned()
        .collect()
}

// ─── Pagination ──────────────────────────────────────────────────────

/// A 1-based page request with one of the [`PAGE_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Result<Self, ListingError> {
        if page == 0 {
            return Err(ListingError::ZeroPage);
        }
        if !PAGE_SIZES.contains(&size) {
            return Err(ListingError::UnsupportedPageSize(size));
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the totals the list footer shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 1-based inclusive positions of the first and last item on this page,
    /// as in "Showing 11 to 20 of 42 entries". `None` when the page is empty.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

/// Slice `items` into the requested page. A page past the end is empty.
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let total = items.len();
    let start = (request.page - 1).saturating_mul(request.size);
    let page_items = items
        .iter()
        .skip(start)
        .take(request.size)
        .cloned()
        .collect();
    Page {
        items: page_items,
        page: request.page,
        page_size: request.size,
        total,
        total_pages: total.div_ceil(request.size),
    }
}
