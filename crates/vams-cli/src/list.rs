//! # List Subcommand
//!
//! The vendor agreement list: one row per agreement, newest vendor first,
//! filtered by keyword and paginated.

use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use vams_catalog::{
    filter, paginate, AgreementRow, InMemoryVendorStore, Page, PageRequest, SearchScope,
    VendorService, DEFAULT_PAGE_SIZE,
};
use vams_core::today_utc;

use crate::config::CliConfig;
use crate::output::{render_table, to_json, OutputFormat};

/// Arguments for the list subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Vendor list file (YAML or JSON). Overrides the config file.
    #[arg(long)]
    pub vendors: Option<PathBuf>,

    /// Case-insensitive search text. Empty matches everything.
    #[arg(long, default_value = "")]
    pub keyword: String,

    /// Column to search: all, name, code or document.
    #[arg(long, default_value = "all")]
    pub scope: SearchScope,

    /// Rows per page: 10, 25, 50 or 100.
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Page number, starting at 1.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Date used to derive agreement status (YYYY-MM-DD). Defaults to today (UTC).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Execute the list subcommand.
pub fn run(args: &ListArgs, config: &CliConfig) -> anyhow::Result<ExitCode> {
    let vendors = config.vendors(args.vendors.as_deref())?;
    let store = InMemoryVendorStore::with_records(vendors)?;
    let service = VendorService::new(store, config.registry(&[]));

    let today = args.today.unwrap_or_else(today_utc);
    let size = args
        .page_size
        .or(config.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let request = PageRequest::new(args.page, size)?;

    let rows = filter(&service.rows(today), &args.keyword, args.scope);
    let page = paginate(&rows, request);
    tracing::debug!(total = page.total, page = page.page, "agreement list built");

    let out = match args.format {
        OutputFormat::Table => render_page(&page),
        OutputFormat::Json => to_json(&page)?,
    };
    print!("{out}");
    Ok(ExitCode::SUCCESS)
}

const HEADERS: [&str; 9] = [
    "Create Date",
    "Agreement No",
    "Vendor Code",
    "Vendor Name",
    "Type",
    "Date From",
    "Date To",
    "Status",
    "Regions",
];

/// Render a page as a table with a "Showing x to y of z entries" footer.
pub fn render_page(page: &Page<AgreementRow>) -> String {
    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|r| {
            vec![
                r.created_at.date().format("%d %b %Y").to_string(),
                r.document_number.clone(),
                r.vendor_code.to_string(),
                r.vendor_name.clone(),
                r.agreement_type.map(|t| t.to_string()).unwrap_or_default(),
                r.start_date.clone(),
                r.end_date.clone(),
                r.status.to_string(),
                r.regions.join(", "),
            ]
        })
        .collect();

    let mut out = render_table(&HEADERS, &rows);
    let (first, last) = page.range().unwrap_or((0, 0));
    out.push_str(&format!(
        "\nShowing {first} to {last} of {} entries (page {} of {})\n",
        page.total,
        page.page,
        page.total_pages.max(1)
    ));
    out
}
