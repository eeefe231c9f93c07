//! # Log Tail Handler

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use std::collections::HashMap;
use std::sync::Arc;

use crate::web::response_types::ApiError;
use crate::web::state::StatusWebState;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Last lines of the log file: GET /logs?max_lines=N
///
/// `max_lines` defaults to the configured line count when missing or not a
/// non-negative integer, and is clamped to the configured cap. The query is
/// taken as a plain map so a malformed value never rejects the request.
pub async fn get_logs(
    State(state): State<Arc<StatusWebState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, ApiError> {
    let max_lines = params.get("max_lines").map(String::as_str);
    let body = state.status_service().log_tail(max_lines).await?;

    Ok(([(header::CONTENT_TYPE, TEXT_PLAIN)], body))
}
