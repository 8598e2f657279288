use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use crate::api::AppState;
use crate::errors::ReportError;

/// List the environment's reports and hand the report server session to the
/// browser so the embedded viewer URLs load without a second logon.
pub async fn list_reports(State(state): State<AppState>) -> Result<Response, ReportError> {
    let listing = state.reader.get_reports().await?;

    let cookie = HeaderValue::from_str(&listing.session_cookie.to_set_cookie())
        .map_err(|e| ReportError::Internal(format!("Session cookie is not a valid header: {}", e)))?;

    Ok(([(header::SET_COOKIE, cookie)], Json(listing.reports)).into_response())
}
