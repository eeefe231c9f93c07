//! Status Web API Module
//!
//! Axum router exposing the status endpoints. Hosts embed the service by
//! nesting [`create_app`]'s router under their own prefix, or run it
//! standalone through [`crate::bootstrap`].

use axum::Router;
use std::{sync::Arc, time::Duration};
use tracing::info;

pub mod handlers;
pub mod middleware;
pub mod response_types;
pub mod routes;
pub mod state;

pub use response_types::ApiError;
pub use state::{StatusWebConfig, StatusWebState};

/// Create the status web application with all routes and middleware
///
/// Routes are nested under `state.config.route_prefix` when it is non-empty.
pub fn create_app(state: Arc<StatusWebState>) -> Router {
    let mut status_routes = Router::new()
        .merge(routes::status_routes())
        .merge(routes::asset_routes());

    if state.config.config_endpoint_enabled {
        status_routes = status_routes.merge(routes::config_routes());
    }

    let prefix = state.config.route_prefix.clone();
    let app = if prefix.is_empty() {
        status_routes
    } else {
        Router::new().nest(&prefix, status_routes)
    };

    let app = middleware::apply_middleware_stack(
        app.fallback(handlers::not_found),
        Duration::from_millis(state.config.request_timeout_ms),
    )
    .with_state(state);

    info!(route_prefix = %prefix, "Status web application created");
    app
}
