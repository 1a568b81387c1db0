//! # cmdsync Domain Layer
//!
//! Core types shared by every other crate of the workspace: command
//! definitions, scopes, digests, remote records, the error type and the port
//! traits the outer layers implement.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Command definition trees and declared command nodes |
//! | [`value_objects`] | Scope, digest, remote command, mention |
//! | [`ports`] | Registry, translator, digest store and interaction traits |
//! | [`error`] | Domain error type |
//! | [`constants`] | Registry limits and digest parameters |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{CommandDefinition, DeclaredCommand};
pub use error::{Error, Result, UserFacingError};
pub use value_objects::{CommandDigest, CommandRef, Mention, RemoteCommand, Scope};
