//! Configuration structs

mod identify_config;

pub use identify_config::{ConfigError, IdentifyConfig, ShardConfig};
