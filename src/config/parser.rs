use std::path::Path;
use crate::errors::ReportError;
use super::types::ReaderConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub const ENV_USERNAME: &str = "REPORT_SERVER_USERNAME";
pub const ENV_PASSWORD: &str = "REPORT_SERVER_PASSWORD";
pub const ENV_ENVIRONMENT: &str = "REPORT_SERVER_ENVIRONMENT";

pub async fn parse_config(path: &Path) -> Result<ReaderConfig, ReportError> {
    if !path.exists() {
        return Err(ReportError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(ReportError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let mut config: ReaderConfig = serde_yaml::from_value(yaml)?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ReportError> {
    // Convert YAML value to JSON for schema validation
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| ReportError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ReportError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; the typed parse and validate_config are authoritative
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Replace credentials and environment with values from the process
/// environment, when set and non-empty.
pub fn apply_env_overrides<F>(config: &mut ReaderConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let server = &mut config.report_server;
    let overrides: [(&str, &mut String); 3] = [
        (ENV_USERNAME, &mut server.username),
        (ENV_PASSWORD, &mut server.password),
        (ENV_ENVIRONMENT, &mut server.environment),
    ];

    for (key, slot) in overrides {
        if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
            debug!(key, "Applying environment override");
            *slot = value;
        }
    }
}

/// Semantic checks the schema cannot express.
pub fn validate_config(config: &ReaderConfig) -> Result<(), ReportError> {
    let server = &config.report_server;

    let url = reqwest::Url::parse(&server.base_url)
        .map_err(|e| ReportError::Config(format!("Invalid base_url '{}': {}", server.base_url, e)))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ReportError::Config(format!(
            "base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if server.cookie_name.trim().is_empty() {
        return Err(ReportError::Config("cookie_name must not be empty".into()));
    }

    validate_environment(&server.environment)?;

    if server.timeout_secs == Some(0) {
        return Err(ReportError::Config("timeout_secs must be at least 1".into()));
    }

    if server.username.is_empty() && server.password.is_empty() {
        warn!("Report server credentials are empty");
    }

    Ok(())
}

/// The environment names one catalog folder: non-empty, no `/`.
pub fn validate_environment(environment: &str) -> Result<(), ReportError> {
    let environment = environment.trim();
    if environment.is_empty() {
        return Err(ReportError::Config("environment must not be empty".into()));
    }
    if environment.contains('/') {
        return Err(ReportError::Config(format!(
            "environment '{}' must be a single path segment",
            environment
        )));
    }
    Ok(())
}
