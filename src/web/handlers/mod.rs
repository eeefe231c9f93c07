//! Status Web API Handlers
//!
//! HTTP request handlers for the status endpoints.

pub mod assets;
pub mod config;
pub mod logs;
pub mod status;

use super::response_types::ApiError;

/// Fallback for paths outside the status routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
