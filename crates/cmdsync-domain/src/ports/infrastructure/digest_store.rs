//! Digest Store Port
//!
//! Defines the contract for persisting the digest of the last synced command
//! tree between runs.

use crate::error::Result;
use crate::value_objects::CommandDigest;
use async_trait::async_trait;

/// Single-record store for the last synced digest
///
/// There is exactly one record per installation. Implementations create it
/// with the empty "never synced" value when it is missing and overwrite it in
/// place on save.
///
/// Read and write failures surface as `Error::Persistence`; callers must not
/// treat them as "unchanged".
#[async_trait]
pub trait DigestStoreProvider: Send + Sync {
    /// Read the persisted digest, `None` when nothing was synced yet
    async fn load(&self) -> Result<Option<CommandDigest>>;

    /// Overwrite the persisted digest
    async fn save(&self, digest: CommandDigest) -> Result<()>;

    /// Get the name/identifier of this store implementation
    fn provider_name(&self) -> &str;
}
