//! Status Web API Middleware
//!
//! Request ID generation, tracing, CORS and request timeout.

pub mod request_id;

use axum::http::StatusCode;
use axum::middleware;
use axum::Router;
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::web::state::StatusWebState;

/// Apply the middleware stack to the status router
///
/// Outermost first: tracing, CORS, request timeout, request ID.
pub fn apply_middleware_stack(
    router: Router<Arc<StatusWebState>>,
    request_timeout: Duration,
) -> Router<Arc<StatusWebState>> {
    let common_middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ));

    router
        .layer(middleware::from_fn(request_id::add_request_id))
        .layer(common_middleware)
}

/// The panel is loaded from the host's origin, which may differ from ours
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
