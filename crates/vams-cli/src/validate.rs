//! # Validate Subcommand
//!
//! Checks a vendor record file against the mandatory-field policy and
//! prints every violation. Exits non-zero when the record is invalid.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use vams_core::{FieldKey, VendorType};
use vams_policy::{validate, Rule, ValidationReport, Violation};

use crate::config::CliConfig;
use crate::input::read_vendor;
use crate::output::{to_json, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Vendor record file (YAML or JSON).
    pub file: PathBuf,

    /// Validate as a new registration: require uploaded files and check
    /// NPWP uniqueness.
    #[arg(long)]
    pub new: bool,

    /// Additional registered NPWP number. Repeatable.
    #[arg(long = "registry", value_name = "NPWP")]
    pub registry: Vec<String>,

    /// Validate against this vendor type instead of the record's own.
    #[arg(long)]
    pub vendor_type: Option<VendorType>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// One violation with its display message.
#[derive(Debug, Serialize)]
struct RenderedViolation {
    #[serde(flatten)]
    violation: Violation,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Outcome {
    vendor_code: String,
    valid: bool,
    violations: Vec<RenderedViolation>,
}

/// Execute the validate subcommand.
pub fn run(args: &ValidateArgs, config: &CliConfig) -> anyhow::Result<ExitCode> {
    let record = read_vendor(&args.file)?;
    let registry = config.registry(&args.registry);
    let vendor_type = args.vendor_type.or(record.vendor_type);
    let report = validate(&record, vendor_type, args.new, &registry);
    tracing::info!(
        code = %record.vendor_code(),
        violations = report.len(),
        new = args.new,
        "record validated"
    );

    let out = match args.format {
        OutputFormat::Table => render_report(record.vendor_code().as_str(), vendor_type, &report),
        OutputFormat::Json => to_json(&Outcome {
            vendor_code: record.vendor_code().to_string(),
            valid: report.is_valid(),
            violations: report
                .violations()
                .iter()
                .map(|&v| RenderedViolation {
                    violation: v,
                    message: message(v, vendor_type),
                })
                .collect(),
        })?,
    };
    print!("{out}");

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// The message the vendor form shows for a violation.
pub fn message(violation: Violation, vendor_type: Option<VendorType>) -> String {
    let field = violation.field;
    match (violation.rule, field) {
        (Rule::Missing, FieldKey::SppkpNumber)
            if vendor_type == Some(VendorType::IndividualEntrepreneur) =>
        {
            "Non PKP Number is required".to_string()
        }
        (Rule::Missing, FieldKey::SppkpFile)
            if vendor_type == Some(VendorType::IndividualEntrepreneur) =>
        {
            "Non PKP File is required".to_string()
        }
        (Rule::Missing, _) => format!("{} is required", field.label()),
        (Rule::Duplicate, _) => format!("This {} is already registered.", field.label()),
        (Rule::Empty, FieldKey::Agreements) => "At least one Agreement is required".to_string(),
        (Rule::Empty, _) => format!("{} required", field.label()),
        (Rule::OutOfRange, _) => format!("{} must be between 0 and 100", field.label()),
        (Rule::Invalid, _) => format!("{} is invalid", field.label()),
    }
}

/// Render a report as text.
pub fn render_report(
    vendor_code: &str,
    vendor_type: Option<VendorType>,
    report: &ValidationReport,
) -> String {
    if report.is_valid() {
        return format!("{vendor_code}: valid\n");
    }
    let mut out = format!(
        "{vendor_code}: {} problem(s). Please fix the following errors:\n",
        report.len()
    );
    for &v in report.violations() {
        out.push_str(&format!("  - {}  [{v}]\n", message(v, vendor_type)));
    }
    out
}
