//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and the outer layers. High-level
//! code (the application layer) depends on these traits; providers and
//! infrastructure implement them.
//!
//! ## Organization
//!
//! - **infrastructure/** - Local services (digest persistence, interaction replies)
//! - **providers/** - External services (command registry, translator)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::{DigestStoreProvider, FallbackErrorHandler, InteractionResponder};
pub use providers::{CommandRegistryProvider, CommandTranslator};
