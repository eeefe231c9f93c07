//! # Status Service
//!
//! Reads the health file, the log tail, the runtime environment and the
//! frontend script independently of the HTTP layer. The web handlers are thin
//! wrappers over these operations.

mod service;

pub use service::{StatusService, STATIC_ASSET_NAME};
