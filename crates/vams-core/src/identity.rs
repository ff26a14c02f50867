//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers in the vendor agreement stack.
//! These prevent accidental identifier confusion: you cannot pass an
//! `AgreementId` where a `VendorId` is expected.
//!
//! ## Vendor Code Invariant
//!
//! A `VendorCode` is assigned exactly once, when a draft record is created,
//! and is derived from the creation instant: `VND` followed by the last six
//! digits of the Unix epoch in milliseconds. The type has no setter, and the
//! editing session exposes no event that touches it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::VamsError;

/// Prefix shared by every vendor code.
pub const VENDOR_CODE_PREFIX: &str = "VND";

/// Unique identifier for a vendor master record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VendorId(pub Uuid);

/// Unique identifier for an agreement attached to a vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgreementId(pub Uuid);

/// Human-facing vendor code such as `VND123456`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VendorCode(String);

/// Reference to an uploaded document. Only the file name is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileRef(pub String);

impl VendorId {
    /// Generate a new random vendor identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for VendorId {
    fn default() -> Self {
        Self::new()
    }
}

impl AgreementId {
    /// Generate a new random agreement identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AgreementId {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorCode {
    /// Derive a vendor code from an instant expressed in epoch milliseconds.
    ///
    /// Keeps the last six decimal digits, zero-padded.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self(format!("{VENDOR_CODE_PREFIX}{:06}", millis.rem_euclid(1_000_000)))
    }

    /// Derive a vendor code from a UTC instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(instant.timestamp_millis())
    }

    /// Parse a stored vendor code.
    ///
    /// Accepts `VND` followed by one or more ASCII digits. Stored fixtures use
    /// short legacy codes (`VND001`), so the digit count is not fixed.
    pub fn parse(s: &str) -> Result<Self, VamsError> {
        let digits = s.strip_prefix(VENDOR_CODE_PREFIX).ok_or_else(|| {
            VamsError::InvalidIdentifier {
                kind: "vendor code",
                value: s.to_string(),
                reason: format!("missing {VENDOR_CODE_PREFIX} prefix"),
            }
        })?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VamsError::InvalidIdentifier {
                kind: "vendor code",
                value: s.to_string(),
                reason: "suffix must be decimal digits".to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }

    /// The code as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VendorCode {
    type Error = VamsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VendorCode> for String {
    fn from(code: VendorCode) -> Self {
        code.0
    }
}

impl FileRef {
    /// Wrap a file name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The tracked file name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vendor:{}", self.0)
    }
}

impl std::fmt::Display for AgreementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "agreement:{}", self.0)
    }
}

impl std::fmt::Display for VendorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
