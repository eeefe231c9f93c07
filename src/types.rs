//! Response bodies served by the status endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `GET /status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatusResponse {
    /// Trimmed health file contents, empty when the file is absent
    pub message: String,
}

/// Body of `GET /config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfigResponse {
    pub config: RuntimeConfigSnapshot,
}

/// Environment and command line captured at request time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfigSnapshot {
    pub env: BTreeMap<String, String>,
    pub cmd: String,
}
