//! Registry Synchronizer Use Case
//!
//! Pushes declared commands to the remote registry, reads them back, and
//! keeps the scoped cache of remote records. The conditional sync compares
//! the digest of the declared global commands with the one persisted by the
//! last successful sync and only pushes when they differ.
//!
//! Ordering contract of a sync: digest check, then push, then digest write.
//! A failed push leaves the old digest in place so the next run retries.

use super::{ChangeDetector, CommandStore, ScopedCommandCache};
use crate::domain_services::{CommandSyncInterface, SyncOutcome};
use async_trait::async_trait;
use cmdsync_domain::error::Result;
use cmdsync_domain::ports::infrastructure::DigestStoreProvider;
use cmdsync_domain::ports::providers::CommandRegistryProvider;
use cmdsync_domain::value_objects::{CommandDigest, GuildId, RemoteCommand, Scope};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Registry synchronizer implementation
pub struct RegistrySynchronizer {
    commands: Arc<CommandStore>,
    registry: Arc<dyn CommandRegistryProvider>,
    digest_store: Arc<dyn DigestStoreProvider>,
    detector: ChangeDetector,
    cache: ScopedCommandCache,
    in_flight: Mutex<()>,
}

impl RegistrySynchronizer {
    /// Create a synchronizer with injected dependencies
    pub fn new(
        commands: Arc<CommandStore>,
        registry: Arc<dyn CommandRegistryProvider>,
        digest_store: Arc<dyn DigestStoreProvider>,
        detector: ChangeDetector,
    ) -> Self {
        Self {
            commands,
            registry,
            digest_store,
            detector,
            cache: ScopedCommandCache::new(),
            in_flight: Mutex::new(()),
        }
    }

    /// Declared commands this synchronizer pushes
    pub fn commands(&self) -> &Arc<CommandStore> {
        &self.commands
    }

    /// Remote record cache
    pub fn cache(&self) -> &ScopedCommandCache {
        &self.cache
    }

    /// Push the commands declared for one guild
    pub async fn sync_guild(&self, guild: GuildId) -> Result<Arc<[RemoteCommand]>> {
        self.push(Scope::Guild(guild)).await
    }

    async fn payloads(&self, scope: Scope) -> Result<Vec<Value>> {
        self.detector.payloads(self.commands.commands(scope)).await
    }

    /// Send payloads and replace the cache entry; caller holds `in_flight`
    async fn declare(&self, scope: Scope, payloads: &[Value]) -> Result<Arc<[RemoteCommand]>> {
        let records = self
            .registry
            .declare_commands(scope, payloads)
            .await
            .inspect_err(|e| {
                if e.is_transient() {
                    warn!(%scope, error = %e, "Command registry unavailable during push");
                }
            })?;
        debug!(%scope, count = records.len(), "Pushed commands");
        Ok(self.cache.replace(scope, records))
    }

    async fn push_global_and_persist(
        &self,
        payloads: &[Value],
        digest: CommandDigest,
        previous: Option<CommandDigest>,
    ) -> Result<SyncOutcome> {
        let records = self.declare(Scope::Global, payloads).await?;
        self.digest_store.save(digest).await?;
        info!(%digest, registered = records.len(), "Command tree synced");
        Ok(SyncOutcome::Synced {
            digest,
            previous,
            registered: records.len(),
        })
    }
}

#[async_trait]
impl CommandSyncInterface for RegistrySynchronizer {
    async fn push(&self, scope: Scope) -> Result<Arc<[RemoteCommand]>> {
        let _guard = self.in_flight.lock().await;
        let payloads = self.payloads(scope).await?;
        self.declare(scope, &payloads).await
    }

    async fn fetch(&self, scope: Scope) -> Result<Arc<[RemoteCommand]>> {
        // A push that lands while the listing is in flight wins over it
        let seen = self.cache.generation(scope);
        let records = self.registry.list_commands(scope).await.inspect_err(|e| {
            if e.is_transient() {
                warn!(%scope, error = %e, "Command registry unavailable during fetch");
            }
        })?;
        debug!(%scope, count = records.len(), "Fetched commands");
        Ok(self.cache.replace_if_current(scope, seen, records))
    }

    async fn sync_if_changed(&self) -> Result<SyncOutcome> {
        let _guard = self.in_flight.lock().await;

        let payloads = self.payloads(Scope::Global).await?;
        let digest = ChangeDetector::digest_payloads(&payloads)?;
        let persisted = self.digest_store.load().await?;

        if !ChangeDetector::has_changed(digest, persisted) {
            debug!(%digest, "Command tree unchanged, skipping sync");
            return Ok(SyncOutcome::Unchanged { digest });
        }

        info!(%digest, "New version of the command tree. Syncing now.");
        self.push_global_and_persist(&payloads, digest, persisted)
            .await
    }

    async fn force_sync(&self) -> Result<SyncOutcome> {
        let _guard = self.in_flight.lock().await;

        let payloads = self.payloads(Scope::Global).await?;
        let digest = ChangeDetector::digest_payloads(&payloads)?;
        let persisted = self.digest_store.load().await?;

        info!(%digest, "Forcing command tree sync");
        self.push_global_and_persist(&payloads, digest, persisted)
            .await
    }

    async fn cached_or_fetch(&self, scope: Scope) -> Result<Arc<[RemoteCommand]>> {
        match self.cache.get(scope) {
            Some(records) => Ok(records),
            None => self.fetch(scope).await,
        }
    }

    fn cached(&self, scope: Scope) -> Option<Arc<[RemoteCommand]>> {
        self.cache.get(scope)
    }

    async fn current_digest(&self) -> Result<CommandDigest> {
        self.detector
            .compute_digest(self.commands.commands(Scope::Global))
            .await
    }

    async fn persisted_digest(&self) -> Result<Option<CommandDigest>> {
        self.digest_store.load().await
    }
}
