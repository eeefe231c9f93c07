//! # Web Test Infrastructure
//!
//! Starts a real status server on an ephemeral port over a temporary
//! directory holding the health file, log file and static asset.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use service_status::{
    ServiceStatusConfig, StaticProcessEnvironment, StatusServerBootstrap, StatusService,
    StatusSystemHandle, StatusWebConfig, StatusWebState,
};
use tempfile::TempDir;

pub const TEST_SCRIPT: &str = "export async function render() { console.log(\"panel\"); }\n";

/// Temporary files backing a test server
pub struct StatusFixture {
    pub dir: TempDir,
}

impl StatusFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn health_file(&self) -> PathBuf {
        self.dir.path().join("status.txt")
    }

    pub fn log_file(&self) -> PathBuf {
        self.dir.path().join("service.log")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.dir.path().join("static")
    }

    pub fn write_health(&self, contents: &str) {
        fs::write(self.health_file(), contents).expect("failed to write health file");
    }

    pub fn write_log_lines(&self, count: usize) {
        let contents: String = (0..count).map(|i| format!("log line {i}\n")).collect();
        fs::write(self.log_file(), contents).expect("failed to write log file");
    }

    pub fn write_script(&self) {
        fs::create_dir_all(self.static_dir()).expect("failed to create static dir");
        fs::write(self.static_dir().join("index.js"), TEST_SCRIPT).expect("failed to write script");
    }

    pub fn config(&self) -> ServiceStatusConfig {
        ServiceStatusConfig {
            health_file: self.health_file(),
            log_file: self.log_file(),
            static_dir: self.static_dir(),
            bind_address: "127.0.0.1:0".to_string(),
            ..Default::default()
        }
    }
}

/// Test server instance managing a running status server
pub struct TestServer {
    pub handle: StatusSystemHandle,
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Start a server reporting a fixed process environment
    pub async fn start(config: ServiceStatusConfig, env: StaticProcessEnvironment) -> Self {
        let web_config = StatusWebConfig::from(&config);
        let service = Arc::new(StatusService::new(config, Arc::new(env)));
        let state = Arc::new(StatusWebState::new(service, web_config));
        Self::start_with_state(state).await
    }

    /// Start a server reporting the live process environment
    pub async fn start_live(config: ServiceStatusConfig) -> Self {
        Self::start_with_state(Arc::new(StatusWebState::from_config(config))).await
    }

    async fn start_with_state(state: Arc<StatusWebState>) -> Self {
        let prefix = state.config.route_prefix.clone();
        let handle = StatusServerBootstrap::bootstrap_with_state(state)
            .await
            .expect("failed to start status server");
        let base_url = handle.base_url(&prefix);
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("failed to build http client");

        Self {
            handle,
            base_url,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn shutdown(self) {
        tokio::time::timeout(Duration::from_secs(5), self.handle.shutdown())
            .await
            .expect("server did not shut down in time")
            .expect("server exited with error");
    }
}

pub fn test_environment() -> StaticProcessEnvironment {
    StaticProcessEnvironment::new(
        [
            ("API_TOKEN", "s3cret"),
            ("HOME", "/home/svc"),
            ("LANG", "C.UTF-8"),
        ],
        ["/opt/svc/bin/sync", "--interval", "30"],
    )
}

pub fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
