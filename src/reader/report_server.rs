use std::sync::Arc;
use async_trait::async_trait;
use reqwest::cookie::Jar;
use tracing::info;
use crate::errors::ReportError;
use crate::models::ReportListing;
use super::catalog::{fetch_catalog, process_records};
use super::options::ReaderOptions;
use super::provider::ReportsReader;
use super::session::{build_client, logon};

/// Reads the Power BI report catalog of a report server.
///
/// Each call builds its own client and cookie jar; nothing is shared between
/// calls.
pub struct ReportServerReader {
    options: ReaderOptions,
}

impl ReportServerReader {
    pub fn new(options: ReaderOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl ReportsReader for ReportServerReader {
    async fn get_reports(&self) -> Result<ReportListing, ReportError> {
        let jar = Arc::new(Jar::default());
        let client = build_client(&self.options, jar.clone())?;

        let session_cookie = logon(&client, &jar, &self.options).await?;
        let records = fetch_catalog(&client, &self.options).await?;

        let total = records.len();
        let reports = process_records(records, &self.options.environment, &self.options.base_url);
        info!(
            total,
            matched = reports.len(),
            environment = %self.options.environment,
            "Report catalog loaded"
        );

        Ok(ReportListing {
            reports,
            session_cookie,
        })
    }
}
