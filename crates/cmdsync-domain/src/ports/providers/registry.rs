//! Command Registry Provider Port
//!
//! Port for the remote registry that stores application commands. Declaring
//! is a bulk overwrite of a whole scope; listing returns what is live.

use crate::error::Result;
use crate::value_objects::{RemoteCommand, Scope};
use async_trait::async_trait;
use serde_json::Value;

/// Remote command registry
///
/// # Implementations
///
/// - **Http**: the platform's REST API
/// - **InMemory**: local registry for development and tests
///
/// # Errors
///
/// Transport failures, rate limiting and server errors surface as
/// `Error::RegistryUnavailable`; validation failures and bad credentials as
/// `Error::RegistryRejected`. Implementations never retry on their own.
///
/// # Example
///
/// ```ignore
/// use cmdsync_domain::ports::providers::CommandRegistryProvider;
/// use cmdsync_domain::value_objects::Scope;
///
/// let live = registry.list_commands(Scope::Global).await?;
/// let replaced = registry.declare_commands(Scope::Global, &payloads).await?;
/// ```
#[async_trait]
pub trait CommandRegistryProvider: Send + Sync {
    /// Replace every command of `scope` with `payloads`
    ///
    /// Returns the records the registry now holds for the scope.
    async fn declare_commands(
        &self,
        scope: Scope,
        payloads: &[Value],
    ) -> Result<Vec<RemoteCommand>>;

    /// Read the commands currently registered under `scope`
    async fn list_commands(&self, scope: Scope) -> Result<Vec<RemoteCommand>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
