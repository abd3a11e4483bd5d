//! # gateway-common
//!
//! Shared utilities for gateway clients built on `gateway-model`.

pub mod config;

// Re-export commonly used types at crate root
pub use config::{ConfigError, IdentifyConfig, ShardConfig};
