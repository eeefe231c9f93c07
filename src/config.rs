//! # Service Status Configuration
//!
//! Startup configuration snapshot for the status service. Values are layered
//! with the `config` crate: built-in defaults, then an optional TOML file, then
//! `SERVICE_STATUS_*` environment variables.
//!
//! Handlers never consult the process environment for these settings; the
//! snapshot is taken once and handed to [`crate::services::StatusService`].

use crate::error::{Result, ServiceStatusError};
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_PREFIX: &str = "SERVICE_STATUS";

pub const DEFAULT_HEALTH_FILE: &str = "/tmp/service_status.txt";
pub const DEFAULT_LOG_FILE: &str = "/tmp/service_status.log";
pub const DEFAULT_MAX_LINES: usize = 500;
pub const DEFAULT_MAX_LINES_CAP: usize = 1000;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:6007";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatusConfig {
    /// File whose trimmed contents are reported by `/status`
    pub health_file: PathBuf,
    /// File tailed by `/logs`
    pub log_file: PathBuf,
    pub default_max_lines: usize,
    pub max_lines_cap: usize,
    /// Directory holding `index.js`
    pub static_dir: PathBuf,
    /// When set, `/config` only reports these environment variables
    #[serde(default)]
    pub env_allowlist: Option<Vec<String>>,
    pub bind_address: String,
    /// Path prefix the routes are nested under, empty for the root
    #[serde(default)]
    pub route_prefix: String,
    pub request_timeout_ms: u64,
    pub config_endpoint_enabled: bool,
}

impl Default for ServiceStatusConfig {
    fn default() -> Self {
        Self {
            health_file: PathBuf::from(DEFAULT_HEALTH_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            default_max_lines: DEFAULT_MAX_LINES,
            max_lines_cap: DEFAULT_MAX_LINES_CAP,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            env_allowlist: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            route_prefix: String::new(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            config_endpoint_enabled: true,
        }
    }
}

impl ServiceStatusConfig {
    /// Load configuration from the process environment and an optional file
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Load configuration with an explicit environment map
    ///
    /// Passing `Some(map)` replaces the process environment as the variable
    /// source, which keeps tests independent of global state.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("health_file", DEFAULT_HEALTH_FILE)?
            .set_default("log_file", DEFAULT_LOG_FILE)?
            .set_default("default_max_lines", DEFAULT_MAX_LINES as i64)?
            .set_default("max_lines_cap", DEFAULT_MAX_LINES_CAP as i64)?
            .set_default("static_dir", DEFAULT_STATIC_DIR)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("route_prefix", "")?
            .set_default("request_timeout_ms", DEFAULT_REQUEST_TIMEOUT_MS as i64)?
            .set_default("config_endpoint_enabled", true)?;

        if let Some(path) = config_file {
            debug!(config_file = %path.display(), "Adding configuration file source");
            builder = builder.add_source(File::from(path).required(true));
        }

        let environment = Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .ignore_empty(true)
            .list_separator(",")
            .with_list_parse_key("env_allowlist")
            .source(env);

        let config: Self = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.normalized().validate()
    }

    /// Resolved tail limits for `/logs`
    pub fn limits(&self) -> LogLimits {
        LogLimits {
            default_lines: self.default_max_lines,
            max_lines_cap: self.max_lines_cap,
        }
    }

    fn normalized(mut self) -> Self {
        self.route_prefix = normalize_prefix(&self.route_prefix);
        self.env_allowlist = self.env_allowlist.map(|names| {
            names
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect()
        });
        self
    }

    /// Reject settings the service cannot honor
    pub fn validate(self) -> Result<Self> {
        if self.max_lines_cap == 0 {
            return Err(ServiceStatusError::configuration(
                "max_lines_cap must be at least 1",
            ));
        }
        if self.default_max_lines > self.max_lines_cap {
            return Err(ServiceStatusError::configuration(format!(
                "default_max_lines ({}) exceeds max_lines_cap ({})",
                self.default_max_lines, self.max_lines_cap
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(ServiceStatusError::configuration(
                "request_timeout_ms must be greater than zero",
            ));
        }
        Ok(self)
    }
}

/// Tail size bounds for the logs endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLimits {
    pub default_lines: usize,
    pub max_lines_cap: usize,
}

impl Default for LogLimits {
    fn default() -> Self {
        Self {
            default_lines: DEFAULT_MAX_LINES,
            max_lines_cap: DEFAULT_MAX_LINES_CAP,
        }
    }
}

impl LogLimits {
    /// Resolve a raw `max_lines` query value to a line count.
    ///
    /// Anything that is not a non-negative integer falls back to the default.
    /// The result never exceeds the cap.
    pub fn resolve(&self, requested: Option<&str>) -> usize {
        let lines = match requested.map(str::trim) {
            Some(raw) => raw.parse::<usize>().unwrap_or_else(|_| {
                debug!(
                    max_lines = raw,
                    fallback = self.default_lines,
                    "Unparseable max_lines, using default"
                );
                self.default_lines
            }),
            None => self.default_lines,
        };
        lines.min(self.max_lines_cap)
    }
}

/// Canonical form of a mount prefix: leading slash, no trailing slash,
/// empty for the root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
