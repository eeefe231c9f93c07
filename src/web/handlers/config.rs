//! # Runtime Configuration Handler
//!
//! Reports the process environment and command line. Environment variables
//! often carry credentials; deployments that expose this route beyond a
//! trusted network should set `env_allowlist` or disable the endpoint.

use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::types::RuntimeConfigResponse;
use crate::web::state::StatusWebState;

/// Environment and command line of the process: GET /config
pub async fn get_config(State(state): State<Arc<StatusWebState>>) -> Json<RuntimeConfigResponse> {
    Json(state.status_service().runtime_config())
}
