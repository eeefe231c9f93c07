//! # Status Server Bootstrap
//!
//! Binds a listener and serves the status router in the background. Used by
//! the standalone binary and by integration tests; embedding hosts call
//! [`crate::web::create_app`] directly instead.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::config::ServiceStatusConfig;
use crate::error::{Result, ServiceStatusError};
use crate::web::{create_app, StatusWebState};

/// Running server handle for lifecycle management
#[derive(Debug)]
pub struct StatusSystemHandle {
    /// Address actually bound (resolves port 0)
    pub local_addr: SocketAddr,
    /// Shutdown signal sender (Some when running, None once stop was requested)
    shutdown_sender: Option<oneshot::Sender<()>>,
    server_task: JoinHandle<std::io::Result<()>>,
}

impl StatusSystemHandle {
    pub fn is_running(&self) -> bool {
        self.shutdown_sender.is_some() && !self.server_task.is_finished()
    }

    /// Base URL including the mount prefix
    pub fn base_url(&self, route_prefix: &str) -> String {
        format!("http://{}{}", self.local_addr, route_prefix)
    }

    /// Request graceful shutdown; in-flight requests are allowed to finish
    pub fn stop(&mut self) {
        if let Some(sender) = self.shutdown_sender.take() {
            // The receiver is gone only if the server already exited.
            let _ = sender.send(());
            info!(address = %self.local_addr, "Status server shutdown requested");
        } else {
            warn!("Status server already stopped");
        }
    }

    /// Wait for the server task to exit
    pub async fn wait(self) -> Result<()> {
        match self.server_task.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(ServiceStatusError::ServerError(e.to_string())),
            Err(e) => Err(ServiceStatusError::TaskJoin(e.to_string())),
        }
    }

    /// Stop and wait for the server to drain
    pub async fn shutdown(mut self) -> Result<()> {
        self.stop();
        self.wait().await
    }
}

pub struct StatusServerBootstrap;

impl StatusServerBootstrap {
    /// Build state from `config` and serve it on `config.bind_address`
    pub async fn bootstrap(config: ServiceStatusConfig) -> Result<StatusSystemHandle> {
        info!(
            health_file = %config.health_file.display(),
            log_file = %config.log_file.display(),
            static_dir = %config.static_dir.display(),
            "Bootstrapping status server"
        );
        Self::bootstrap_with_state(Arc::new(StatusWebState::from_config(config))).await
    }

    /// Serve pre-built state, e.g. one with a custom process environment
    pub async fn bootstrap_with_state(state: Arc<StatusWebState>) -> Result<StatusSystemHandle> {
        let bind_address = state.config.bind_address.clone();
        let listener = TcpListener::bind(&bind_address)
            .await
            .map_err(|source| ServiceStatusError::Bind {
                address: bind_address.clone(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServiceStatusError::Bind {
                address: bind_address.clone(),
                source,
            })?;

        let app = create_app(state);
        let (shutdown_sender, shutdown_receiver) = oneshot::channel::<()>();

        let server_task = tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_receiver.await;
                })
                .await;
            if let Err(e) = &result {
                error!("Status web server error: {}", e);
            }
            result
        });

        info!(address = %local_addr, "Status server listening");

        Ok(StatusSystemHandle {
            local_addr,
            shutdown_sender: Some(shutdown_sender),
            server_task,
        })
    }
}
