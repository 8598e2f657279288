use reqwest::{Client, StatusCode};
use tracing::debug;
use crate::errors::ReportError;
use crate::models::{ReportCatalog, ReportRecord, DEFAULT_ROOT_FOLDER};
use super::options::ReaderOptions;

// Catalog layout: /Home/{environment}/Domains/{domain}/...
const DOMAINS_SEGMENT: &str = "Domains";

/// Fetch the report listing with an already authenticated client.
pub async fn fetch_catalog(
    client: &Client,
    options: &ReaderOptions,
) -> Result<Vec<ReportRecord>, ReportError> {
    let resp = client
        .get(options.catalog_url())
        .send()
        .await
        .map_err(|e| ReportError::Network(format!("Catalog request failed: {}", e)))?;

    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ReportError::Authentication(format!(
            "Report server rejected the session: {}",
            status
        )));
    }
    if !status.is_success() {
        return Err(ReportError::Network(format!("Catalog request returned {}", status)));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| ReportError::Network(format!("Failed to read catalog response: {}", e)))?;
    debug!(bytes = body.len(), "Catalog response received");

    parse_catalog(&body)
}

pub fn parse_catalog(body: &str) -> Result<Vec<ReportRecord>, ReportError> {
    serde_json::from_str::<ReportCatalog>(body)
        .map(|catalog| catalog.value)
        .map_err(|e| ReportError::Deserialization(format!("Invalid report catalog: {}", e)))
}

/// True when `path` has `/{environment}/` somewhere in it, ignoring case.
pub fn in_environment(path: &str, environment: &str) -> bool {
    let needle = format!("/{}/", environment.to_lowercase());
    path.to_lowercase().contains(&needle)
}

pub fn filter_by_environment(records: Vec<ReportRecord>, environment: &str) -> Vec<ReportRecord> {
    records
        .into_iter()
        .filter(|record| in_environment(&record.path, environment))
        .collect()
}

/// The segment following `Domains`, or `/` when there is none. An empty
/// segment (`Domains/` or `Domains//`) is returned as is.
pub fn root_folder(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    segments
        .iter()
        .position(|segment| *segment == DOMAINS_SEGMENT)
        .and_then(|idx| segments.get(idx + 1))
        .map(|segment| segment.to_string())
        .unwrap_or_else(|| DEFAULT_ROOT_FOLDER.to_string())
}

pub fn viewer_url(base_url: &str, path: &str) -> String {
    format!("{}/reports/powerbi{}?rs:embed=true", base_url, path)
}

/// Keep the reports of `environment` and turn their catalog paths into
/// viewer URLs.
pub fn process_records(
    records: Vec<ReportRecord>,
    environment: &str,
    base_url: &str,
) -> Vec<ReportRecord> {
    filter_by_environment(records, environment)
        .into_iter()
        .map(|mut record| {
            record.root_folder = root_folder(&record.path);
            record.path = viewer_url(base_url, &record.path);
            record
        })
        .collect()
}
