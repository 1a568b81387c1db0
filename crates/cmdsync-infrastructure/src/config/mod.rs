//! Configuration management
//!
//! Typed configuration sections and the figment-based loader that merges
//! defaults, a TOML file and `CMDSYNC_` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
