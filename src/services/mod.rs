//! # Services
//!
//! Request-independent operations behind the web handlers.
//!
//! - **status**: health file, log tail, runtime config and static asset reads
//! - **process_env**: the narrow accessor for live environment and argv

pub mod process_env;
pub mod status;

pub use process_env::{LiveProcessEnvironment, ProcessEnvironment, StaticProcessEnvironment};
pub use status::StatusService;
