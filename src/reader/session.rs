use std::sync::Arc;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};
use crate::errors::ReportError;
use crate::models::SessionCookie;
use super::options::ReaderOptions;

/// Build an HTTP client that stores cookies in `jar`.
pub fn build_client(options: &ReaderOptions, jar: Arc<Jar>) -> Result<Client, ReportError> {
    if options.ignore_cert_errors {
        warn!(base_url = %options.base_url, "TLS certificate validation disabled for report server");
    }

    Client::builder()
        .cookie_provider(jar)
        .danger_accept_invalid_certs(options.ignore_cert_errors)
        .timeout(options.timeout)
        .build()
        .map_err(|e| ReportError::Network(format!("Failed to build HTTP client: {}", e)))
}

/// Post the credentials to the logon endpoint and pick the session cookie
/// out of the jar.
pub async fn logon(
    client: &Client,
    jar: &Jar,
    options: &ReaderOptions,
) -> Result<SessionCookie, ReportError> {
    let logon_url = options.logon_url();
    info!(url = %logon_url, user = %options.username, environment = %options.environment, "Logging on to report server");

    let form = [
        ("name", options.username.as_str()),
        ("password", options.password.as_str()),
        ("env", options.environment.as_str()),
    ];

    let resp = client
        .post(&logon_url)
        .form(&form)
        .send()
        .await
        .map_err(|e| ReportError::Network(format!("Logon request failed: {}", e)))?;

    let status = resp.status();
    debug!(status = status.as_u16(), "Logon response received");

    let url = Url::parse(&logon_url)
        .map_err(|e| ReportError::Config(format!("Invalid logon URL '{}': {}", logon_url, e)))?;
    let value = jar
        .cookies(&url)
        .and_then(|header| header.to_str().ok().map(str::to_string))
        .and_then(|header| find_cookie(&header, &options.cookie_name));

    match value {
        Some(value) => {
            debug!(cookie = %options.cookie_name, "Session cookie issued");
            Ok(SessionCookie::new(options.cookie_name.as_str(), value))
        }
        None => Err(ReportError::Authentication(format!(
            "Logon returned {} without issuing cookie '{}'",
            status, options.cookie_name
        ))),
    }
}

/// Look up `name` in a `Cookie` request header (`a=1; b=2`).
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
