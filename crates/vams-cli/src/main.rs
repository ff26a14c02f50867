//! # vams CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use vams_cli::config::CliConfig;

/// Vendor agreement administration.
///
/// Lists vendor agreements, validates vendor records against the
/// mandatory-field policy, and explores regional coverage.
#[derive(Parser, Debug)]
#[command(name = "vams", version, about)]
struct Cli {
    /// YAML configuration file. Defaults to ./vams.yaml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log output format (logs go to stderr; filter with RUST_LOG).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogFormat {
    Text,
    Json,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List vendor agreements with search and pagination.
    List(vams_cli::list::ListArgs),
    /// Validate a vendor record file.
    Validate(vams_cli::validate::ValidateArgs),
    /// Show locations and the districts still available to a vendor.
    Districts(vams_cli::districts::DistrictsArgs),
    /// Compute agreement status for a date range.
    Status(vams_cli::status::StatusArgs),
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = CliConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::List(args) => vams_cli::list::run(args, &config),
        Commands::Validate(args) => vams_cli::validate::run(args, &config),
        Commands::Districts(args) => vams_cli::districts::run(args, &config),
        Commands::Status(args) => vams_cli::status::run(args),
    }
}
