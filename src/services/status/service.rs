//! # Status Service
//!
//! Every operation re-reads its source on each call; nothing is cached and no
//! state is shared between calls, so one instance serves concurrent requests
//! behind an `Arc`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::{LogLimits, ServiceStatusConfig};
use crate::error::{Result, ServiceStatusError};
use crate::services::process_env::{LiveProcessEnvironment, ProcessEnvironment};
use crate::tail;
use crate::types::{HealthStatusResponse, RuntimeConfigResponse, RuntimeConfigSnapshot};

/// File served by `GET /static/index.js`, relative to the static directory
pub const STATIC_ASSET_NAME: &str = "index.js";

/// Status Service
///
/// ## Example
///
/// ```rust,no_run
/// use service_status::{ServiceStatusConfig, StatusService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = StatusService::with_live_environment(ServiceStatusConfig::default());
///
/// let status = service.health_message().await?;
/// println!("health: {}", status.message);
///
/// let logs = service.log_tail(Some("100")).await?;
/// println!("{}", String::from_utf8_lossy(&logs));
/// # Ok(())
/// # }
/// ```
pub struct StatusService {
    config: ServiceStatusConfig,
    process_env: Arc<dyn ProcessEnvironment>,
}

impl std::fmt::Debug for StatusService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusService")
            .field("health_file", &self.config.health_file)
            .field("log_file", &self.config.log_file)
            .field("limits", &self.config.limits())
            .field("static_dir", &self.config.static_dir)
            .finish()
    }
}

impl StatusService {
    pub fn new(config: ServiceStatusConfig, process_env: Arc<dyn ProcessEnvironment>) -> Self {
        Self {
            config,
            process_env,
        }
    }

    /// Service reporting the environment of the current process
    pub fn with_live_environment(config: ServiceStatusConfig) -> Self {
        Self::new(config, Arc::new(LiveProcessEnvironment))
    }

    pub fn config(&self) -> &ServiceStatusConfig {
        &self.config
    }

    pub fn limits(&self) -> LogLimits {
        self.config.limits()
    }

    /// Current health message: GET /status
    ///
    /// The whole health file, trimmed. A missing file reports an empty message.
    pub async fn health_message(&self) -> Result<HealthStatusResponse> {
        let path = &self.config.health_file;
        let message = match tokio::fs::read(path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(health_file = %path.display(), "Health file absent, reporting empty status");
                String::new()
            }
            Err(err) => return Err(ServiceStatusError::io(path, err)),
        };

        Ok(HealthStatusResponse { message })
    }

    /// Trailing log lines: GET /logs
    ///
    /// `max_lines` is the raw query value; see [`LogLimits::resolve`].
    pub async fn log_tail(&self, max_lines: Option<&str>) -> Result<Vec<u8>> {
        let lines = self.limits().resolve(max_lines);
        let body = read_tail(self.config.log_file.clone(), lines).await?;

        debug!(
            log_file = %self.config.log_file.display(),
            lines = lines,
            bytes = body.len(),
            "Served log tail"
        );
        Ok(body)
    }

    /// Environment and command line of the process: GET /config
    pub fn runtime_config(&self) -> RuntimeConfigResponse {
        let mut env = self.process_env.vars();
        if let Some(allowlist) = &self.config.env_allowlist {
            env.retain(|name, _| allowlist.iter().any(|allowed| allowed == name));
        }
        let cmd = self.process_env.args().join(" ");

        debug!(variables = env.len(), "Captured runtime configuration");

        RuntimeConfigResponse {
            config: RuntimeConfigSnapshot { env, cmd },
        }
    }

    /// Location of the frontend script
    pub fn static_asset_path(&self) -> PathBuf {
        self.config.static_dir.join(STATIC_ASSET_NAME)
    }

    /// Frontend script bytes: GET /static/index.js
    ///
    /// A missing script is a packaging defect and is reported as such.
    pub async fn static_asset(&self) -> Result<Vec<u8>> {
        let path = self.static_asset_path();
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                error!(asset = %path.display(), "Required static asset is missing");
                Err(ServiceStatusError::MissingAsset { path })
            }
            Err(err) => Err(ServiceStatusError::io(path, err)),
        }
    }
}

/// Run the tail scan off the async workers
async fn read_tail(path: PathBuf, lines: usize) -> Result<Vec<u8>> {
    let scan_path = path.clone();
    tokio::task::spawn_blocking(move || tail::tail_text(&scan_path, lines))
        .await
        .map_err(|e| ServiceStatusError::TaskJoin(e.to_string()))?
        .map_err(|e| ServiceStatusError::io(path, e))
}
