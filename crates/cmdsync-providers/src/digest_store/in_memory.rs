//! In-Memory Digest Store
//!
//! Keeps the digest for the lifetime of the process. Counts reads and
//! writes, and can be told to fail writes.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::ports::infrastructure::DigestStoreProvider;
use cmdsync_domain::value_objects::CommandDigest;

/// In-memory digest store
#[derive(Debug, Default)]
pub struct InMemoryDigestStore {
    digest: RwLock<Option<CommandDigest>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryDigestStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `digest`
    pub fn with_digest(digest: CommandDigest) -> Self {
        Self {
            digest: RwLock::new(Some(digest)),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail with a persistence error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of loads performed
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// Number of successful saves performed
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Current value without counting a load
    pub async fn peek(&self) -> Option<CommandDigest> {
        *self.digest.read().await
    }
}

#[async_trait]
impl DigestStoreProvider for InMemoryDigestStore {
    async fn load(&self) -> Result<Option<CommandDigest>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(*self.digest.read().await)
    }

    async fn save(&self, digest: CommandDigest) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::persistence("In-memory digest store rejects writes"));
        }
        *self.digest.write().await = Some(digest);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
