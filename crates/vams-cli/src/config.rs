//! # CLI Configuration
//!
//! Optional YAML settings shared by every subcommand. The file named by
//! `--config` must exist; otherwise `vams.yaml` in the working directory is
//! used when present. Command-line flags override file values.
//!
//! ```yaml
//! locations: data/locations.yaml
//! vendors: data/vendors.yaml
//! registeredNpwps:
//!   - 12.345.678.9-012.000
//! pageSize: 25
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vams_catalog::fixtures;
use vams_core::{LocationHierarchy, VendorRecord};
use vams_policy::StaticRegistry;

use crate::input;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "vams.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CliConfig {
    /// Location hierarchy file (YAML or JSON). Built-in data when unset.
    pub locations: Option<PathBuf>,
    /// Vendor list file (YAML or JSON). Demonstration vendors when unset.
    pub vendors: Option<PathBuf>,
    /// NPWP numbers registered elsewhere. Demonstration list when empty.
    pub registered_npwps: Vec<String>,
    /// Default page size for `list`.
    pub page_size: Option<usize>,
}

impl CliConfig {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(yaml).context("invalid configuration")
    }

    /// Load `explicit`, or the default file if it exists, or defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE}; using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// The location hierarchy from `flag`, the config file, or built-in data.
    pub fn hierarchy(&self, flag: Option<&Path>) -> anyhow::Result<LocationHierarchy> {
        match flag.or(self.locations.as_deref()) {
            Some(path) => LocationHierarchy::load(path)
                .with_context(|| format!("loading locations from {}", path.display())),
            None => Ok(LocationHierarchy::indonesia()),
        }
    }

    /// Vendor records from `flag`, the config file, or the demonstration set.
    pub fn vendors(&self, flag: Option<&Path>) -> anyhow::Result<Vec<VendorRecord>> {
        match flag.or(self.vendors.as_deref()) {
            Some(path) => input::read_vendors(path),
            None => fixtures::vendors().context("loading demonstration vendors"),
        }
    }

    /// Registered NPWP numbers from the config (or the demonstration list)
    /// plus `extra`.
    pub fn registry(&self, extra: &[String]) -> StaticRegistry {
        let base: Vec<String> = if self.registered_npwps.is_empty() {
            fixtures::REGISTERED_NPWPS.iter().map(|s| s.to_string()).collect()
        } else {
            self.registered_npwps.clone()
        };
        StaticRegistry::new(base.into_iter().chain(extra.iter().cloned()))
    }
}
