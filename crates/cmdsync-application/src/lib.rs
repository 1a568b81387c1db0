//! Application Layer - cmdsync
//!
//! Use cases that keep the locally declared command tree in step with the
//! remote registry and resolve mentions of registered commands.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the use cases on top of the domain port traits
//! - Defines the service interfaces the facade and the CLI depend on
//! - Has no dependency on concrete providers or infrastructure
//!
//! ## Use Cases
//!
//! - [`CommandStore`](use_cases::CommandStore): declared commands per scope
//! - [`ChangeDetector`](use_cases::ChangeDetector): canonical payloads and digests
//! - [`RegistrySynchronizer`](use_cases::RegistrySynchronizer): push, fetch, conditional sync, scoped cache
//! - [`MentionResolver`](use_cases::MentionResolver): scoped mention lookup with lazy fetch
//! - [`ErrorBoundary`](use_cases::ErrorBoundary): command failure routing

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
