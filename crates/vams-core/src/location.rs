//! # Location Hierarchy
//!
//! Read-only Province → City → District reference data consumed by the
//! regional coverage editor. The hierarchy is supplied in full at startup,
//! either the built-in dataset ([`LocationHierarchy::indonesia`]) or a YAML
//! or JSON file. Nothing in the workspace mutates it after construction.
//!
//! Order is significant: provinces, cities and districts are offered to the
//! user in the order they appear in the source data.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VamsError;

/// A city with its districts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City name.
    pub name: String,
    /// District names, in display order.
    pub districts: Vec<String>,
}

/// A province with its cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Province name.
    pub name: String,
    /// Cities, in display order.
    pub cities: Vec<City>,
}

/// The full location tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationHierarchy {
    provinces: Vec<Province>,
}

impl LocationHierarchy {
    /// Build a hierarchy, rejecting duplicate names at any level.
    pub fn new(provinces: Vec<Province>) -> Result<Self, VamsError> {
        let hierarchy = Self { provinces };
        hierarchy.check_unique_names()?;
        Ok(hierarchy)
    }

    /// The built-in dataset.
    pub fn indonesia() -> Self {
        fn city(name: &str, districts: &[&str]) -> City {
            City {
                name: name.to_string(),
                districts: districts.iter().map(|d| d.to_string()).collect(),
            }
        }
        fn province(name: &str, cities: Vec<City>) -> Province {
            Province {
                name: name.to_string(),
                cities,
            }
        }

        Self {
            provinces: vec![
                province(
                    "DKI Jakarta",
                    vec![
                        city(
                            "Jakarta Selatan",
                            &["Kebayoran Baru", "Kebayoran Lama", "Tebet", "Setiabudi", "Cilandak"],
                        ),
                        city("Jakarta Pusat", &["Menteng", "Gambir", "Tanah Abang", "Senen"]),
                    ],
                ),
                province(
                    "Jawa Barat",
                    vec![
                        city("Bandung", &["Cicendo", "Andir", "Coblong", "Gedebage"]),
                        city("Bogor", &["Bogor Tengah", "Bogor Selatan", "Bogor Utara"]),
                    ],
                ),
                province(
                    "Bali",
                    vec![
                        city("Denpasar", &["Denpasar Selatan", "Denpasar Barat", "Denpasar Timur"]),
                        city("Badung", &["Kuta", "Kuta Utara", "Mengwi"]),
                    ],
                ),
            ],
        }
    }

    /// Parse a hierarchy from YAML (a sequence of provinces).
    pub fn from_yaml_str(s: &str) -> Result<Self, VamsError> {
        let provinces: Vec<Province> = serde_yaml::from_str(s)?;
        Self::new(provinces)
    }

    /// Parse a hierarchy from JSON (an array of provinces).
    pub fn from_json_str(s: &str) -> Result<Self, VamsError> {
        let provinces: Vec<Province> = serde_json::from_str(s)?;
        Self::new(provinces)
    }

    /// Load a hierarchy from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self, VamsError> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            other => Err(VamsError::InvalidLocationData(format!(
                "unsupported file extension {other:?} for {}",
                path.display()
            ))),
        }
    }

    /// All provinces in display order.
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// Look up a province by name.
    pub fn province(&self, name: &str) -> Option<&Province> {
        self.provinces.iter().find(|p| p.name == name)
    }

    /// Cities of a province. Empty when the province is unknown.
    pub fn cities(&self, province: &str) -> &[City] {
        self.province(province)
            .map(|p| p.cities.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a city within a province.
    pub fn city(&self, province: &str, city: &str) -> Option<&City> {
        self.cities(province).iter().find(|c| c.name == city)
    }

    /// Districts of a (province, city) pair. Empty when either is unknown.
    pub fn districts(&self, province: &str, city: &str) -> &[String] {
        self.city(province, city)
            .map(|c| c.districts.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `district` belongs to `(province, city)`.
    pub fn contains(&self, province: &str, city: &str, district: &str) -> bool {
        self.districts(province, city).iter().any(|d| d == district)
    }

    fn check_unique_names(&self) -> Result<(), VamsError> {
        let mut provinces = HashSet::new();
        for p in &self.provinces {
            if !provinces.insert(p.name.as_str()) {
                return Err(VamsError::InvalidLocationData(format!(
                    "duplicate province {:?}",
                    p.name
                )));
            }
            let mut cities = HashSet::new();
            for c in &p.cities {
                if !cities.insert(c.name.as_str()) {
                    return Err(VamsError::InvalidLocationData(format!(
                        "duplicate city {:?} in {:?}",
                        c.name, p.name
                    )));
                }
                let mut districts = HashSet::new();
                for d in &c.districts {
                    if !districts.insert(d.as_str()) {
                        return Err(VamsError::InvalidLocationData(format!(
                            "duplicate district {d:?} in {:?}/{:?}",
                            p.name, c.name
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for LocationHierarchy {
    fn default() -> Self {
        Self::indonesia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_shape() {
        let h = LocationHierarchy::indonesia();
        let names: Vec<&str> = h.provinces().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["DKI Jakarta", "Jawa Barat", "Bali"]);
        assert_eq!(h.cities("Bali").len(), 2);
        assert_eq!(h.districts("DKI Jakarta", "Jakarta Selatan").len(), 5);
    }

    #[test]
    fn test_builtin_dataset_passes_uniqueness_check() {
        let h = LocationHierarchy::indonesia();
        assert!(LocationHierarchy::new(h.provinces().to_vec()).is_ok());
    }

    #[test]
    fn test_unknown_lookups_are_empty() {
        let h = LocationHierarchy::indonesia();
        assert!(h.cities("Papua").is_empty());
        assert!(h.districts("Bali", "Bandung").is_empty());
        assert!(h.city("DKI Jakarta", "Bogor").is_none());
    }

    #[test]
    fn test_contains() {
        let h = LocationHierarchy::indonesia();
        assert!(h.contains("Bali", "Badung", "Kuta"));
        assert!(!h.contains("Bali", "Denpasar", "Kuta"));
        assert!(!h.contains("Jawa Barat", "Badung", "Kuta"));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
- name: Banten
  cities:
    - name: Tangerang
      districts: [Ciledug, Karawaci]
"#;
        let h = LocationHierarchy::from_yaml_str(yaml).unwrap();
        assert_eq!(h.districts("Banten", "Tangerang"), ["Ciledug", "Karawaci"]);
    }

    #[test]
    fn test_from_json_rejects_duplicate_district() {
        let json = r#"[{"name":"Bali","cities":[{"name":"Badung","districts":["Kuta","Kuta"]}]}]"#;
        let err = LocationHierarchy::from_json_str(json).unwrap_err();
        assert!(matches!(err, VamsError::InvalidLocationData(_)));
    }

    #[test]
    fn test_rejects_duplicate_province() {
        let p = Province {
            name: "Bali".to_string(),
            cities: vec![],
        };
        assert!(LocationHierarchy::new(vec![p.clone(), p]).is_err());
    }

    #[test]
    fn test_serializes_as_province_list() {
        let h = LocationHierarchy::indonesia();
        let json = serde_json::to_value(&h).unwrap();
        assert!(json.is_array());
        let back: LocationHierarchy = serde_json::from_value(json).unwrap();
        assert_eq!(back, h);
    }
}
