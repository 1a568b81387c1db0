//! # cmdsync
//!
//! Keeps a bot's declared slash commands in step with the remote command
//! registry and renders clickable mentions of registered commands.
//!
//! - Declared commands are hashed into a digest; a sync only pushes when the
//!   digest differs from the one persisted by the last successful sync.
//! - Remote records are cached per scope and fetched lazily the first time a
//!   mention needs them.
//!
//! ## Example
//!
//! ```ignore
//! use cmdsync::application::{CommandSyncInterface, MentionResolverInterface};
//! use cmdsync::infrastructure::{ConfigLoader, init_app_from_config};
//! use cmdsync::domain::CommandRef;
//!
//! let context = init_app_from_config(ConfigLoader::new().load()?).await?;
//! context.synchronizer().sync_if_changed().await?;
//! if let Some(mention) = context
//!     .resolver()
//!     .find_mention_for(CommandRef::Name("play"), None)
//!     .await?
//! {
//!     println!("Try {mention}");
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Command definitions, scopes, digests, port traits and errors
//! - `application` - Store, change detector, synchronizer, resolver, error boundary
//! - `providers` - REST and in-memory registries, translator, digest stores
//! - `infrastructure` - Configuration, logging, manifests and bootstrap
//! - `cli` - The `cmdsync` command line

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cmdsync_domain::*;
}

/// Application layer - use cases and service interfaces
pub mod application {
    pub use cmdsync_application::*;
}

/// Providers - port implementations
pub mod providers {
    pub use cmdsync_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use cmdsync_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::{
    CommandDefinition, CommandDigest, CommandRef, DeclaredCommand, Error, Mention, RemoteCommand,
    Result, Scope,
};
