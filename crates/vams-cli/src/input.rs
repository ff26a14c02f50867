//! Reading vendor records from YAML or JSON files.
//!
//! The format follows the file extension: `.json` is JSON, anything else is
//! YAML.

use anyhow::Context;
use std::path::Path;

use vams_catalog::fixtures;
use vams_core::VendorRecord;

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Parse a list of vendor records.
pub fn parse_vendors(text: &str, json: bool) -> anyhow::Result<Vec<VendorRecord>> {
    if json {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(fixtures::parse_vendors_yaml(text)?)
    }
}

/// Parse a single vendor record.
pub fn parse_vendor(text: &str, json: bool) -> anyhow::Result<VendorRecord> {
    if json {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Read a file holding a list of vendor records.
pub fn read_vendors(path: &Path) -> anyhow::Result<Vec<VendorRecord>> {
    let vendors = parse_vendors(&read(path)?, is_json(path))
        .with_context(|| format!("parsing vendors from {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = vendors.len(), "vendors loaded");
    Ok(vendors)
}

/// Read a file holding one vendor record.
pub fn read_vendor(path: &Path) -> anyhow::Result<VendorRecord> {
    parse_vendor(&read(path)?, is_json(path))
        .with_context(|| format!("parsing vendor from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "id": "0d4b3a8e-5f6a-4b7c-8d9e-0f1a2b3c4d5e",
        "vendorCode": "VND700001",
        "createdAt": "2026-01-02T03:04:05Z",
        "vendorName": "PT Contoh"
    }"#;

    #[test]
    fn test_extension_selects_format() {
        assert!(is_json(Path::new("vendor.JSON")));
        assert!(!is_json(Path::new("vendor.yaml")));
        assert!(!is_json(Path::new("vendor")));
    }

    #[test]
    fn test_parse_single_vendor_json_and_yaml() {
        let from_json = parse_vendor(RECORD_JSON, true).unwrap();
        assert_eq!(from_json.vendor_name, "PT Contoh");
        let yaml = "id: 0d4b3a8e-5f6a-4b7c-8d9e-0f1a2b3c4d5e\nvendorCode: VND700001\ncreatedAt: \"2026-01-02T03:04:05Z\"\nvendorName: PT Contoh\n";
        assert_eq!(parse_vendor(yaml, false).unwrap(), from_json);
    }

    #[test]
    fn test_parse_vendor_list_json() {
        let vendors = parse_vendors(&format!("[{RECORD_JSON}]"), true).unwrap();
        assert_eq!(vendors.len(), 1);
        assert_eq!(vendors[0].vendor_code().as_str(), "VND700001");
    }

    #[test]
    fn test_bad_vendor_code_rejected() {
        let bad = RECORD_JSON.replace("VND700001", "ABC1");
        assert!(parse_vendor(&bad, true).is_err());
    }
}
