//! Infrastructure Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | DigestStoreProvider | Persisted digest of the last synced command tree |
//! | InteractionResponder | Reply channel of a command invocation |
//! | FallbackErrorHandler | Sink for unexpected command failures |

/// Digest persistence port
pub mod digest_store;
/// Interaction reply ports
pub mod interaction;

pub use digest_store::DigestStoreProvider;
pub use interaction::{FallbackErrorHandler, InteractionResponder};
