//! # Service Status Server
//!
//! Standalone HTTP server for the status endpoints. Configuration comes from
//! `SERVICE_STATUS_*` environment variables and an optional TOML file;
//! command-line flags override both.

use anyhow::Context;
use clap::Parser;
use service_status::config::normalize_prefix;
use service_status::{logging, ServiceStatusConfig, StatusServerBootstrap};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "service-status-server")]
#[command(about = "Serve health status, log tail and runtime config over HTTP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:6007
    #[arg(short, long)]
    bind: Option<String>,

    /// Path prefix to mount the routes under
    #[arg(short, long)]
    prefix: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = ServiceStatusConfig::load(cli.config.as_deref())
        .context("Failed to load service status configuration")?;
    if let Some(bind) = cli.bind {
        config.bind_address = bind;
    }
    if let Some(prefix) = cli.prefix {
        config.route_prefix = normalize_prefix(&prefix);
    }

    let route_prefix = config.route_prefix.clone();
    let mut handle = StatusServerBootstrap::bootstrap(config)
        .await
        .context("Failed to start status server")?;
    info!(url = %handle.base_url(&route_prefix), "Service status server ready");

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("Shutdown signal received");
    handle.stop();
    handle.wait().await?;

    Ok(())
}
