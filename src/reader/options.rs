use std::fmt;
use std::time::Duration;
use crate::config::{validate_environment, ReportServerConfig};
use crate::errors::ReportError;

const LOGON_PATH: &str = "/ReportServer/logon.aspx";
const CATALOG_PATH: &str = "/reports/api/v2.0/PowerBIReports?$select=Name,Path";

/// Everything a reader call needs, passed explicitly rather than looked up
/// from configuration at call time.
#[derive(Clone)]
pub struct ReaderOptions {
    /// Report server root, with all trailing `/` removed.
    pub base_url: String,
    pub ignore_cert_errors: bool,
    pub cookie_name: String,
    pub environment: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl ReaderOptions {
    pub fn from_config(config: &ReportServerConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            ignore_cert_errors: config.ignore_cert_errors,
            cookie_name: config.cookie_name.trim().to_string(),
            environment: config.environment.trim().to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout: Duration::from_secs(config.timeout_secs()),
        }
    }

    pub fn with_environment(mut self, environment: &str) -> Result<Self, ReportError> {
        validate_environment(environment)?;
        self.environment = environment.trim().to_string();
        Ok(self)
    }

    pub fn logon_url(&self) -> String {
        format!("{}{}", self.base_url, LOGON_PATH)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.base_url, CATALOG_PATH)
    }
}

impl fmt::Debug for ReaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderOptions")
            .field("base_url", &self.base_url)
            .field("ignore_cert_errors", &self.ignore_cert_errors)
            .field("cookie_name", &self.cookie_name)
            .field("environment", &self.environment)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
