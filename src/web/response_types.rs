//! # Web API Error Types
//!
//! Error type for the status endpoints and its HTTP response conversion.
//! Clients only ever see a code and a generic message; the underlying cause
//! (file paths, io errors) is logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::error::ServiceStatusError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found")]
    NotFound,

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code, message) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found"),

            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Internal server error",
            ),
        };

        let error_response = json!({
            "error": {
                "code": error_code,
                "message": message
            }
        });

        (status_code, Json(error_response)).into_response()
    }
}

/// Log the domain error with full detail and hide it behind a 500
impl From<ServiceStatusError> for ApiError {
    fn from(err: ServiceStatusError) -> Self {
        match &err {
            ServiceStatusError::MissingAsset { path } => {
                error!(asset = %path.display(), "Deployment defect: static asset missing");
            }
            other => {
                error!(error = %other, "Status request failed");
            }
        }
        ApiError::Internal
    }
}
