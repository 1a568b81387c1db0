//! Synchronization and resolution configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Command tree synchronization configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Digest record location, the user cache directory when unset
    pub digest_path: Option<PathBuf>,

    /// Run a conditional sync as soon as the services are built
    pub sync_on_startup: bool,
}

/// Mention resolver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Search the global scope for lookups made without a guild
    pub fallback_to_global: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_to_global: true,
        }
    }
}

/// Translator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// TOML locale table; payloads are untranslated when unset
    pub locales_path: Option<PathBuf>,
}

/// Declared commands configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// TOML command manifest
    pub manifest_path: Option<PathBuf>,
}
