//! # Regional Coverage Editor
//!
//! Cascading location picker plus the coverage-set transformations.
//!
//! ## Selection
//!
//! ```text
//! select_province ──▶ select_city ──▶ select_district ──▶ add
//!   (clears city       (clears
//!    and district)      district)
//! ```
//!
//! ## Invariants
//!
//! - At most one [`RegionalCoverage`] per (province, city) pair.
//! - District names within an entry are unique.
//! - No entry has an empty district list: removing the last district
//!   removes the entry.
//!
//! A district is added only via a [`DistrictChoice`]. Choices are minted by
//! [`CoverageEditor::available_districts`] and [`CoverageEditor::choose`],
//! which check the location hierarchy and exclude districts the vendor
//! already covers. A stale choice (the district was added after the choice
//! was minted) is ignored.

use vams_core::{LocationHierarchy, RegionalCoverage};

// ─── Pending Selection ───────────────────────────────────────────────

/// The picker's pending province/city/district selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageSelection {
    province: Option<String>,
    city: Option<String>,
    district: Option<String>,
}

impl CoverageSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a province. Clears the pending city and district.
    pub fn select_province(&self, province: impl Into<String>) -> Self {
        Self {
            province: Some(province.into()),
            city: None,
            district: None,
        }
    }

    /// Select a city. Clears the pending district.
    pub fn select_city(&self, city: impl Into<String>) -> Self {
        Self {
            province: self.province.clone(),
            city: Some(city.into()),
            district: None,
        }
    }

    pub fn select_district(&self, district: impl Into<String>) -> Self {
        Self {
            district: Some(district.into()),
            ..self.clone()
        }
    }

    /// Keep province and city, drop the district. Used after an add.
    pub fn clear_district(&self) -> Self {
        Self {
            district: None,
            ..self.clone()
        }
    }

    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }
}

// ─── District Choice ─────────────────────────────────────────────────

/// A district that was verified against the hierarchy and was not yet
/// covered when it was offered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DistrictChoice {
    province: String,
    city: String,
    district: String,
}

impl DistrictChoice {
    pub fn province(&self) -> &str {
        &self.province
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn district(&self) -> &str {
        &self.district
    }
}

// ─── Editor ──────────────────────────────────────────────────────────

/// Coverage queries and transformations over a fixed location hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct CoverageEditor<'h> {
    hierarchy: &'h LocationHierarchy,
}

impl<'h> CoverageEditor<'h> {
    pub fn new(hierarchy: &'h LocationHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Province names in display order.
    pub fn provinces(&self) -> Vec<&'h str> {
        self.hierarchy
            .provinces()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    /// City names of a province in display order.
    pub fn cities(&self, province: &str) -> Vec<&'h str> {
        self.hierarchy
            .cities(province)
            .iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Districts of (province, city) the vendor does not cover yet.
    ///
    /// Empty when the pair is unknown or every district is already assigned.
    pub fn available_districts(
        &self,
        coverages: &[RegionalCoverage],
        province: &str,
        city: &str,
    ) -> Vec<DistrictChoice> {
        let existing = coverages.iter().find(|c| c.matches(province, city));
        self.hierarchy
            .districts(province, city)
            .iter()
            .filter(|d| existing.map_or(true, |cov| !cov.has_district(d)))
            .map(|d| DistrictChoice {
                province: province.to_string(),
                city: city.to_string(),
                district: d.clone(),
            })
            .collect()
    }

    /// Mint a choice for one district, if it is currently available.
    pub fn choose(
        &self,
        coverages: &[RegionalCoverage],
        province: &str,
        city: &str,
        district: &str,
    ) -> Option<DistrictChoice> {
        self.available_districts(coverages, province, city)
            .into_iter()
            .find(|c| c.district == district)
    }

    /// Mint a choice from a complete pending selection.
    pub fn choose_selection(
        &self,
        coverages: &[RegionalCoverage],
        selection: &CoverageSelection,
    ) -> Option<DistrictChoice> {
        self.choose(
            coverages,
            selection.province()?,
            selection.city()?,
            selection.district()?,
        )
    }
}

// ─── Transformations ─────────────────────────────────────────────────

/// Add a chosen district, appending to the matching entry or creating one.
pub fn add_district(coverages: &[RegionalCoverage], choice: &DistrictChoice) -> Vec<RegionalCoverage> {
    let mut next = coverages.to_vec();
    match next
        .iter_mut()
        .find(|c| c.matches(&choice.province, &choice.city))
    {
        Some(entry) if entry.has_district(&choice.district) => {}
        Some(entry) => entry.districts.push(choice.district.clone()),
        None => next.push(RegionalCoverage {
            province: choice.province.clone(),
            city: choice.city.clone(),
            districts: vec![choice.district.clone()],
        }),
    }
    next
}

/// Remove one district; drop the entry if it becomes empty.
pub fn remove_district(
    coverages: &[RegionalCoverage],
    province: &str,
    city: &str,
    district: &str,
) -> Vec<RegionalCoverage> {
    coverages
        .iter()
        .filter_map(|c| {
            if !c.matches(province, city) {
                return Some(c.clone());
            }
            let districts: Vec<String> = c
                .districts
                .iter()
                .filter(|d| *d != district)
                .cloned()
                .collect();
            (!districts.is_empty()).then(|| RegionalCoverage {
                districts,
                ..c.clone()
            })
        })
        .collect()
}

/// Remove a whole (province, city) entry with all its districts.
pub fn remove_entry(coverages: &[RegionalCoverage], province: &str, city: &str) -> Vec<RegionalCoverage> {
    coverages
        .iter()
        .filter(|c| !c.matches(province, city))
        .cloned()
        .collect()
}
