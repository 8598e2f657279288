use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::ReportError;

impl IntoResponse for ReportError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            // upstream report server failures
            ReportError::Authentication(_)
            | ReportError::Network(_)
            | ReportError::Deserialization(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(error_type = self.classify().error_type, error = %self, "Request failed");
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
