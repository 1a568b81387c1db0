//! Domain Value Objects
//!
//! Immutable values without identity, compared by their attributes.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Scope`] | Global scope or a single guild |
//! | [`CommandDigest`] | Fingerprint of a declared command set |
//! | [`RemoteCommand`] | Registry record of a registered command |
//! | [`Mention`] | Renderable reference to a registered command |
//! | [`CommandRef`] | Name-or-handle input of the mention resolver |

/// Command tree digest
pub mod digest;
/// Mentions and resolver input
pub mod mention;
/// Remote registry records
pub mod remote;
/// Registration scopes
pub mod scope;

pub use digest::CommandDigest;
pub use mention::{CommandRef, Mention};
pub use remote::{CommandId, RemoteCommand};
pub use scope::{GuildId, Scope};
