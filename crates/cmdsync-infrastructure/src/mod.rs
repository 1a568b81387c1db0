//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `CMDSYNC_` environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`manifest`] | TOML command manifests |
//! | [`bootstrap`] | Composition root wiring providers into the use cases |
//! | [`error_ext`] | Context helpers converting foreign errors |
//! | [`constants`] | Centralized configuration constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod manifest;

// Re-export commonly used types
pub use bootstrap::{AppContext, init_app, init_app_from_config};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use manifest::CommandManifest;
