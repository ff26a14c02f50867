//! # Error Types
//!
//! Defines the error type used by the foundational crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! Validation of a vendor record never produces these errors: policy
//! violations are data (see `vams-policy`), not failures. `VamsError`
//! covers parsing of enum labels and identifiers, and loading of reference
//! data from disk.

use thiserror::Error;

/// Top-level error type for the foundational crate.
#[derive(Error, Debug)]
pub enum VamsError {
    /// A label did not match any variant of the named enum.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// The enum being parsed (e.g. "vendor type").
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// An identifier did not match its required format.
    #[error("invalid {kind} {value:?}: {reason}")]
    InvalidIdentifier {
        /// The identifier kind (e.g. "vendor code").
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Timestamp parsing failed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Location reference data is structurally unusable.
    #[error("invalid location data: {0}")]
    InvalidLocationData(String),

    /// YAML deserialization error.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl VamsError {
    /// Shorthand for an [`VamsError::UnknownVariant`].
    pub fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}
