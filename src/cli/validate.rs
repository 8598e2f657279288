use std::path::PathBuf;
use crate::cli::commands::ValidateArgs;
use crate::config::parse_config;
use crate::errors::ReportError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), ReportError> {
    let config = parse_config(&PathBuf::from(&args.config)).await?;
    println!(
        "Configuration is valid: {} (environment '{}' on {})",
        args.config, config.report_server.environment, config.report_server.base_url
    );
    Ok(())
}
