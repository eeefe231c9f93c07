//! # Status Web Application State
//!
//! Shared state handed to every handler: the status service and the router
//! settings it was built with.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::config::{
    normalize_prefix, ServiceStatusConfig, DEFAULT_BIND_ADDRESS, DEFAULT_REQUEST_TIMEOUT_MS,
};
use crate::services::StatusService;

/// Router and listener settings
#[derive(Debug, Clone, Serialize)]
pub struct StatusWebConfig {
    pub bind_address: String,
    pub route_prefix: String,
    pub request_timeout_ms: u64,
    pub config_endpoint_enabled: bool,
}

impl Default for StatusWebConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            route_prefix: String::new(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            config_endpoint_enabled: true,
        }
    }
}

impl From<&ServiceStatusConfig> for StatusWebConfig {
    fn from(config: &ServiceStatusConfig) -> Self {
        Self {
            bind_address: config.bind_address.clone(),
            route_prefix: normalize_prefix(&config.route_prefix),
            request_timeout_ms: config.request_timeout_ms,
            config_endpoint_enabled: config.config_endpoint_enabled,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StatusWebState {
    pub service: Arc<StatusService>,
    pub config: StatusWebConfig,
}

impl StatusWebState {
    pub fn new(service: Arc<StatusService>, config: StatusWebConfig) -> Self {
        info!(
            bind_address = %config.bind_address,
            route_prefix = %config.route_prefix,
            config_endpoint_enabled = config.config_endpoint_enabled,
            "Initializing status web state"
        );

        Self { service, config }
    }

    /// State for a service reporting the live process environment
    pub fn from_config(config: ServiceStatusConfig) -> Self {
        let web_config = StatusWebConfig::from(&config);
        Self::new(
            Arc::new(StatusService::with_live_environment(config)),
            web_config,
        )
    }

    pub fn status_service(&self) -> &Arc<StatusService> {
        &self.service
    }
}
