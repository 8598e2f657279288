use std::fmt;
use serde::Deserialize;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    pub report_server: ReportServerConfig,
}

#[derive(Clone, Deserialize)]
pub struct ReportServerConfig {
    pub base_url: String,
    #[serde(default)]
    pub ignore_cert_errors: bool,
    pub cookie_name: String,
    pub environment: String,
    pub username: String,
    pub password: String,
    pub timeout_secs: Option<u64>,
}

impl ReportServerConfig {
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl fmt::Debug for ReportServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportServerConfig")
            .field("base_url", &self.base_url)
            .field("ignore_cert_errors", &self.ignore_cert_errors)
            .field("cookie_name", &self.cookie_name)
            .field("environment", &self.environment)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
