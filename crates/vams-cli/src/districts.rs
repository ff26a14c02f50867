//! # Districts Subcommand
//!
//! Drives the cascading location picker from the command line:
//!
//! - no `--province`: print the whole hierarchy;
//! - `--province` only: print its cities;
//! - `--province` and `--city`: print the districts still available, after
//!   removing those the vendor in `--vendor` already covers.

use anyhow::bail;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

use vams_core::{LocationHierarchy, RegionalCoverage};
use vams_state::CoverageEditor;

use crate::config::CliConfig;
use crate::input::read_vendor;
use crate::output::{to_json, OutputFormat};

/// Arguments for the districts subcommand.
#[derive(Args, Debug)]
pub struct DistrictsArgs {
    #[arg(long)]
    pub province: Option<String>,

    #[arg(long, requires = "province")]
    pub city: Option<String>,

    /// Vendor record file whose regional coverage is excluded.
    #[arg(long, requires = "city")]
    pub vendor: Option<PathBuf>,

    /// Location hierarchy file (YAML or JSON). Overrides the config file.
    #[arg(long)]
    pub locations: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Execute the districts subcommand.
pub fn run(args: &DistrictsArgs, config: &CliConfig) -> anyhow::Result<ExitCode> {
    let hierarchy = config.hierarchy(args.locations.as_deref())?;
    let coverages = match &args.vendor {
        Some(path) => read_vendor(path)?.regional_coverages,
        None => Vec::new(),
    };
    let out = render(
        &hierarchy,
        &coverages,
        args.province.as_deref(),
        args.city.as_deref(),
        args.format,
    )?;
    print!("{out}");
    Ok(ExitCode::SUCCESS)
}

/// Render the picker level selected by `province` and `city`.
pub fn render(
    hierarchy: &LocationHierarchy,
    coverages: &[RegionalCoverage],
    province: Option<&str>,
    city: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let editor = CoverageEditor::new(hierarchy);

    let Some(province) = province else {
        return match format {
            OutputFormat::Json => to_json(hierarchy),
            OutputFormat::Table => Ok(render_tree(hierarchy)),
        };
    };
    if hierarchy.province(province).is_none() {
        bail!("unknown province {province:?}");
    }

    let Some(city) = city else {
        let cities = editor.cities(province);
        return match format {
            OutputFormat::Json => to_json(&cities),
            OutputFormat::Table => Ok(lines(&cities)),
        };
    };
    if hierarchy.city(province, city).is_none() {
        bail!("unknown city {city:?} in {province}");
    }

    let available: Vec<String> = editor
        .available_districts(coverages, province, city)
        .iter()
        .map(|choice| choice.district().to_string())
        .collect();

    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Available<'a> {
                province: &'a str,
                city: &'a str,
                districts: &'a [String],
            }
            to_json(&Available {
                province,
                city,
                districts: &available,
            })
        }
        OutputFormat::Table if available.is_empty() => {
            Ok(format!("All districts of {city}, {province} are already assigned.\n"))
        }
        OutputFormat::Table => Ok(lines(&available)),
    }
}

fn lines<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(|s| format!("{}\n", s.as_ref())).collect()
}

fn render_tree(hierarchy: &LocationHierarchy) -> String {
    let mut out = String::new();
    for province in hierarchy.provinces() {
        out.push_str(&format!("{}\n", province.name));
        for city in &province.cities {
            out.push_str(&format!("  {}: {}\n", city.name, city.districts.join(", ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_table(
        coverages: &[RegionalCoverage],
        province: Option<&str>,
        city: Option<&str>,
    ) -> anyhow::Result<String> {
        render(
            &LocationHierarchy::indonesia(),
            coverages,
            province,
            city,
            OutputFormat::Table,
        )
    }

    #[test]
    fn test_tree_lists_every_province() {
        let out = render_table(&[], None, None).unwrap();
        assert!(out.starts_with("DKI Jakarta\n  Jakarta Selatan: Kebayoran Baru"));
        assert!(out.contains("Bali\n"));
        assert!(out.contains("  Badung: Kuta, Kuta Utara, Mengwi\n"));
    }

    #[test]
    fn test_cities_of_province() {
        assert_eq!(
            render_table(&[], Some("Jawa Barat"), None).unwrap(),
            "Bandung\nBogor\n"
        );
    }

    #[test]
    fn test_available_districts_exclude_coverage() {
        let coverages = [RegionalCoverage {
            province: "Bali".into(),
            city: "Badung".into(),
            districts: vec!["Kuta".into()],
        }];
        assert_eq!(
            render_table(&coverages, Some("Bali"), Some("Badung")).unwrap(),
            "Kuta Utara\nMengwi\n"
        );
    }

    #[test]
    fn test_all_assigned_message() {
        let coverages = [RegionalCoverage {
            province: "Jawa Barat".into(),
            city: "Bogor".into(),
            districts: vec!["Bogor Tengah".into(), "Bogor Selatan".into(), "Bogor Utara".into()],
        }];
        let out = render_table(&coverages, Some("Jawa Barat"), Some("Bogor")).unwrap();
        assert_eq!(out, "All districts of Bogor, Jawa Barat are already assigned.\n");
    }

    #[test]
    fn test_unknown_names_are_errors() {
        assert!(render_table(&[], Some("Papua"), None).is_err());
        assert!(render_table(&[], Some("Bali"), Some("Bandung")).is_err());
    }

    #[test]
    fn test_json_available() {
        let out = render(
            &LocationHierarchy::indonesia(),
            &[],
            Some("DKI Jakarta"),
            Some("Jakarta Pusat"),
            OutputFormat::Json,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json["districts"],
            serde_json::json!(["Menteng", "Gambir", "Tanah Abang", "Senen"])
        );
    }
}
