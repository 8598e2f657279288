pub mod routes;
pub mod errors;

use std::sync::Arc;
use axum::Router;
use tower_http::trace::TraceLayer;
use crate::config::ReaderConfig;
use crate::reader::{ReaderOptions, ReportServerReader, ReportsReader};

#[derive(Clone)]
pub struct AppState {
    pub reader: Arc<dyn ReportsReader>,
}

pub fn create_app_state(config: &ReaderConfig) -> AppState {
    let options = ReaderOptions::from_config(&config.report_server);
    AppState {
        reader: Arc::new(ReportServerReader::new(options)),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/reports", axum::routing::get(routes::reports::list_reports))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
