//! # Health Status Handler

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::types::HealthStatusResponse;
use crate::web::response_types::ApiError;
use crate::web::state::StatusWebState;

/// Reported health of the monitored service: GET /status
///
/// Returns the trimmed health file contents, or an empty message when the
/// file does not exist.
pub async fn get_status(
    State(state): State<Arc<StatusWebState>>,
) -> Result<Json<HealthStatusResponse>, ApiError> {
    let status = state.status_service().health_message().await?;
    Ok(Json(status))
}
