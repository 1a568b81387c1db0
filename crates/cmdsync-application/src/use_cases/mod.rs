//! Use case implementations

pub mod change_detector;
pub mod command_cache;
pub mod command_store;
pub mod error_boundary;
pub mod mention_resolver;
pub mod registry_sync;

pub use change_detector::ChangeDetector;
pub use command_cache::ScopedCommandCache;
pub use command_store::CommandStore;
pub use error_boundary::{CommandFailure, ErrorBoundary, LoggingFallbackHandler};
pub use mention_resolver::MentionResolver;
pub use registry_sync::RegistrySynchronizer;
