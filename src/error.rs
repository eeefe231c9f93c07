//! # Service Status Errors
//!
//! Domain errors raised while reading the health file, the log file, the
//! static asset, or the startup configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceStatusError {
    /// The file exists but could not be opened or read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file the deployment must ship is absent
    #[error("Required asset missing: {}", .path.display())]
    MissingAsset { path: PathBuf },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    ServerError(String),

    /// A spawned task was cancelled or panicked
    #[error("Background task failed: {0}")]
    TaskJoin(String),
}

impl ServiceStatusError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError(message.into())
    }
}

impl From<config::ConfigError> for ServiceStatusError {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceStatusError>;
