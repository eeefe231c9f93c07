//! Status Web API Routes
//!
//! Route definitions for the status endpoints, relative to the mount prefix.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::web::{handlers, state::StatusWebState};

/// Health file and log tail routes
pub fn status_routes() -> Router<Arc<StatusWebState>> {
    Router::new()
        .route("/status", get(handlers::status::get_status))
        .route("/logs", get(handlers::logs::get_logs))
}

/// Runtime configuration route (environment and command line)
pub fn config_routes() -> Router<Arc<StatusWebState>> {
    Router::new().route("/config", get(handlers::config::get_config))
}

/// Frontend script served to the host panel
pub fn asset_routes() -> Router<Arc<StatusWebState>> {
    Router::new().route("/static/index.js", get(handlers::assets::get_index_js))
}
