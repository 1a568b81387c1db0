//! Command sync service interface

use async_trait::async_trait;
use cmdsync_domain::error::Result;
use cmdsync_domain::value_objects::{CommandDigest, RemoteCommand, Scope};
use std::sync::Arc;

/// Result of a conditional or forced sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The declared set matches the persisted digest; nothing was sent
    Unchanged {
        /// Digest of the declared set
        digest: CommandDigest,
    },
    /// The declared set was pushed and its digest persisted
    Synced {
        /// Digest now persisted
        digest: CommandDigest,
        /// Digest persisted before this sync, if any
        previous: Option<CommandDigest>,
        /// Number of records the registry returned
        registered: usize,
    },
}

impl SyncOutcome {
    /// Whether a push was performed
    pub fn performed(&self) -> bool {
        matches!(self, Self::Synced { .. })
    }

    /// Digest of the declared set
    pub fn digest(&self) -> CommandDigest {
        match self {
            Self::Unchanged { digest } | Self::Synced { digest, .. } => *digest,
        }
    }
}

/// Synchronizes declared commands with the remote registry
///
/// Owns the scoped cache of remote records. Pushes and conditional syncs are
/// serialized; fetches are not.
///
/// # Example
///
/// ```ignore
/// use cmdsync_application::domain_services::CommandSyncInterface;
///
/// async fn startup(sync: &dyn CommandSyncInterface) -> cmdsync_domain::Result<()> {
///     let outcome = sync.sync_if_changed().await?;
///     tracing::info!(performed = outcome.performed(), "command tree checked");
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CommandSyncInterface: Send + Sync {
    /// Replace the remote commands of `scope` with the declared ones
    async fn push(&self, scope: Scope) -> Result<Arc<[RemoteCommand]>>;

    /// Read the remote commands of `scope` into the cache
    ///
    /// Not serialized with pushes. When a push replaces the scope while the
    /// listing is in flight, the listing is dropped and the pushed records
    /// are returned.
    async fn fetch(&self, scope: Scope) -> Result<Arc<[RemoteCommand]>>;

    /// Push the global scope only if its digest differs from the persisted one
    async fn sync_if_changed(&self) -> Result<SyncOutcome>;

    /// Push the global scope and persist its digest unconditionally
    async fn force_sync(&self) -> Result<SyncOutcome>;

    /// Cached records of `scope`, fetching them first on a cold cache
    async fn cached_or_fetch(&self, scope: Scope) -> Result<Arc<[RemoteCommand]>>;

    /// Cached records of `scope`, without any network call
    fn cached(&self, scope: Scope) -> Option<Arc<[RemoteCommand]>>;

    /// Digest of the declared global commands
    async fn current_digest(&self) -> Result<CommandDigest>;

    /// Digest persisted by the last successful sync
    async fn persisted_digest(&self) -> Result<Option<CommandDigest>>;
}
