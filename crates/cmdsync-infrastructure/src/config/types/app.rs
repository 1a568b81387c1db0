//! Application configuration root

use super::{
    CommandsConfig, LoggingConfig, RegistryConfig, ResolverConfig, SyncConfig, TranslatorConfig,
};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Remote registry configuration
    pub registry: RegistryConfig,

    /// Synchronization configuration
    pub sync: SyncConfig,

    /// Mention resolver configuration
    pub resolver: ResolverConfig,

    /// Translator configuration
    pub translator: TranslatorConfig,

    /// Declared commands configuration
    pub commands: CommandsConfig,
}
