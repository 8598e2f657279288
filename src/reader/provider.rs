use async_trait::async_trait;
use crate::errors::ReportError;
use crate::models::ReportListing;

#[async_trait]
pub trait ReportsReader: Send + Sync {
    /// Log on, list the reports of the configured environment, and return
    /// them together with the session cookie to forward.
    async fn get_reports(&self) -> Result<ReportListing, ReportError>;
}
