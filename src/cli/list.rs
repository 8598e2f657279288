use std::path::PathBuf;
use console::style;
use tracing::info;
use crate::cli::commands::ListArgs;
use crate::config::parse_config;
use crate::errors::ReportError;
use crate::models::ReportRecord;
use crate::reader::{ReaderOptions, ReportServerReader, ReportsReader};

pub async fn handle_list(args: ListArgs) -> Result<(), ReportError> {
    let config = parse_config(&PathBuf::from(&args.config)).await?;

    let mut options = ReaderOptions::from_config(&config.report_server);
    if let Some(environment) = &args.environment {
        options = options.with_environment(environment)?;
    }
    info!(base_url = %options.base_url, environment = %options.environment, "Listing reports");

    let reader = ReportServerReader::new(options);
    let listing = reader.get_reports().await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing.reports)?);
    } else {
        print!("{}", render_table(&listing.reports));
    }

    Ok(())
}

/// Render reports as a folder/name/URL table.
pub fn render_table(reports: &[ReportRecord]) -> String {
    if reports.is_empty() {
        return format!("{}\n", style("No reports found").yellow());
    }

    let folder_w = reports.iter().map(|r| r.root_folder.len()).max().unwrap_or(0).max("FOLDER".len());
    let name_w = reports.iter().map(|r| r.name.len()).max().unwrap_or(0).max("NAME".len());

    let mut out = format!(
        "{}  {}  {}\n",
        style(format!("{:<folder_w$}", "FOLDER")).bold(),
        style(format!("{:<name_w$}", "NAME")).bold(),
        style("URL").bold(),
    );
    for report in reports {
        out.push_str(&format!(
            "{}  {:<name_w$}  {}\n",
            style(format!("{:<folder_w$}", report.root_folder)).cyan(),
            report.name,
            style(&report.path).dim(),
        ));
    }
    out
}
