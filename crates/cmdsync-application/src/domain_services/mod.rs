//! Service interfaces implemented by the use cases

/// Mention resolution interface
pub mod mentions;
/// Registry synchronization interface
pub mod sync;

pub use mentions::MentionResolverInterface;
pub use sync::{CommandSyncInterface, SyncOutcome};
