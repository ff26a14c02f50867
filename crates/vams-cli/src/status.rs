//! # Status Subcommand
//!
//! Prints the status an agreement with the given dates has on a day.

use chrono::NaiveDate;
use clap::Args;
use std::process::ExitCode;

use vams_core::{compute_status, today_utc, AgreementStatus};

/// Arguments for the status subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Start date as entered (YYYY-MM-DD or RFC 3339). May be empty.
    #[arg(long, default_value = "")]
    pub start: String,

    /// End date as entered (YYYY-MM-DD or RFC 3339). May be empty.
    #[arg(long, default_value = "")]
    pub end: String,

    /// Evaluation date. Defaults to today (UTC).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Execute the status subcommand.
pub fn run(args: &StatusArgs) -> anyhow::Result<ExitCode> {
    println!("{}", status_of(args));
    Ok(ExitCode::SUCCESS)
}

/// The status for the arguments' dates on their evaluation day.
pub fn status_of(args: &StatusArgs) -> AgreementStatus {
    let today = args.today.unwrap_or_else(today_utc);
    let status = compute_status(&args.start, &args.end, today);
    tracing::debug!(start = %args.start, end = %args.end, %today, %status, "status computed");
    status
}
