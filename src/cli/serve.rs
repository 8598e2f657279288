use std::path::PathBuf;
use crate::cli::commands::ServeArgs;
use crate::config::parse_config;
use crate::errors::ReportError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), ReportError> {
    let config = parse_config(&PathBuf::from(&args.config)).await?;
    info!(host = %args.host, port = args.port, environment = %config.report_server.environment, "Starting API server");

    let state = api::create_app_state(&config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ReportError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
