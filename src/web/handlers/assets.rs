//! # Static Asset Handler

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::web::response_types::ApiError;
use crate::web::state::StatusWebState;

pub const APPLICATION_JAVASCRIPT: &str = "application/javascript";

/// Frontend panel script: GET /static/index.js
pub async fn get_index_js(
    State(state): State<Arc<StatusWebState>>,
) -> Result<impl IntoResponse, ApiError> {
    let script = state.status_service().static_asset().await?;
    Ok(([(header::CONTENT_TYPE, APPLICATION_JAVASCRIPT)], script))
}
