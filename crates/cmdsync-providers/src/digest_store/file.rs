//! File Digest Store
//!
//! Persists the digest of the last synced command tree as a single raw
//! record in a file. The file is created empty ("never synced") on first use
//! and overwritten in place afterwards. Symlinks are resolved before every
//! access so a linked record is updated where it actually lives.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tracing::{debug, warn};

use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::ports::infrastructure::DigestStoreProvider;
use cmdsync_domain::value_objects::CommandDigest;

use crate::constants::{DIGEST_CACHE_DIR, DIGEST_FILE_NAME};

/// File-backed digest store
#[derive(Debug, Clone)]
pub struct FileDigestStore {
    path: PathBuf,
}

impl FileDigestStore {
    /// Create a store at `path`; nothing is touched until the first access
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at [`FileDigestStore::default_path`]
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `<user cache dir>/cmdsync/command_tree.hash`
    pub fn default_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .map(|dir| dir.join(DIGEST_CACHE_DIR).join(DIGEST_FILE_NAME))
            .ok_or_else(|| Error::configuration("Unable to determine the user cache directory"))
    }

    /// Configured location of the record
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the record if missing and resolve it to its real location
    async fn ensure_record(&self) -> Result<PathBuf> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::persistence_with_source(
                    format!("Failed to create digest directory {}", parent.display()),
                    e,
                )
            })?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                Error::persistence_with_source(
                    format!("Failed to create digest record {}", self.path.display()),
                    e,
                )
            })?;

        fs::canonicalize(&self.path).await.map_err(|e| {
            Error::persistence_with_source(
                format!("Failed to resolve digest record {}", self.path.display()),
                e,
            )
        })
    }
}

#[async_trait]
impl DigestStoreProvider for FileDigestStore {
    async fn load(&self) -> Result<Option<CommandDigest>> {
        let path = self.ensure_record().await?;
        let bytes = fs::read(&path).await.map_err(|e| {
            Error::persistence_with_source(
                format!("Failed to read digest record {}", path.display()),
                e,
            )
        })?;

        if bytes.is_empty() {
            debug!(path = %path.display(), "No digest recorded yet");
            return Ok(None);
        }

        let digest = CommandDigest::from_slice(&bytes);
        if digest.is_none() {
            warn!(
                path = %path.display(),
                len = bytes.len(),
                "Ignoring malformed digest record"
            );
        }
        Ok(digest)
    }

    async fn save(&self, digest: CommandDigest) -> Result<()> {
        let path = self.ensure_record().await?;
        fs::write(&path, digest.as_bytes()).await.map_err(|e| {
            Error::persistence_with_source(
                format!("Failed to write digest record {}", path.display()),
                e,
            )
        })?;
        debug!(path = %path.display(), %digest, "Digest record updated");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "file"
    }
}
