#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Service Status
//!
//! Read-only HTTP surface reporting the state of a monitored service.
//!
//! ## Overview
//!
//! A supervising process writes a health message to one file and appends
//! log lines to another. This crate serves those files, plus the process's
//! own environment and command line, to a dashboard panel:
//!
//! | Path | Body |
//! |---|---|
//! | `GET /status` | `{"message": "<trimmed health file>"}` |
//! | `GET /logs?max_lines=N` | last N log lines, verbatim |
//! | `GET /config` | `{"config": {"env": {..}, "cmd": ".."}}` |
//! | `GET /static/index.js` | the panel script |
//!
//! Nothing is cached: every request re-reads its source. Missing health and
//! log files produce empty responses; any other read failure is a 500.
//!
//! ## Module Organization
//!
//! - [`tail`] - Bounded-memory reader for the last N lines of a file
//! - [`services`] - Status operations independent of HTTP
//! - [`web`] - Axum router, handlers and middleware
//! - [`bootstrap`] - Standalone server lifecycle
//! - [`config`] - Layered startup configuration
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use service_status::{ServiceStatusConfig, StatusServerBootstrap};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! service_status::logging::init_tracing();
//!
//! let config = ServiceStatusConfig::load(None)?;
//! let handle = StatusServerBootstrap::bootstrap(config).await?;
//! println!("serving on {}", handle.local_addr);
//! handle.wait().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Embedding
//!
//! A host with its own axum server mounts the router instead:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use service_status::{ServiceStatusConfig, StatusWebState};
//!
//! let config = ServiceStatusConfig {
//!     route_prefix: "/data/plugin/service_status".to_string(),
//!     ..Default::default()
//! };
//! let status_app = service_status::web::create_app(Arc::new(StatusWebState::from_config(config)));
//! let host_app: axum::Router = axum::Router::new().merge(status_app);
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod tail;
pub mod types;
pub mod web;

pub use bootstrap::{StatusServerBootstrap, StatusSystemHandle};
pub use config::{LogLimits, ServiceStatusConfig};
pub use error::{Result, ServiceStatusError};
pub use services::{LiveProcessEnvironment, ProcessEnvironment, StaticProcessEnvironment, StatusService};
pub use types::{HealthStatusResponse, RuntimeConfigResponse, RuntimeConfigSnapshot};
pub use web::{create_app, StatusWebConfig, StatusWebState};
