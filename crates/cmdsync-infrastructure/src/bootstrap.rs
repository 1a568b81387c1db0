//! Service Bootstrap
//!
//! Composition root: turns an [`AppConfig`] and a declared command tree into
//! the wired synchronizer, resolver and error boundary.
//!
//! ```text
//! AppConfig → registry provider ─┐
//!           → digest store ──────┼→ RegistrySynchronizer → MentionResolver
//!           → translator ────────┘
//! ```
//!
//! The `memory` registry pairs with an in-memory digest store so a dry run
//! never marks the real command tree as synced.

use crate::config::{AppConfig, RegistryConfig, SyncConfig, TranslatorConfig};
use crate::constants::{REGISTRY_PROVIDER_HTTP, REGISTRY_PROVIDER_MEMORY};
use crate::manifest::CommandManifest;
use cmdsync_application::domain_services::{CommandSyncInterface, SyncOutcome};
use cmdsync_application::use_cases::{
    ChangeDetector, CommandStore, ErrorBoundary, MentionResolver, RegistrySynchronizer,
};
use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::ports::infrastructure::DigestStoreProvider;
use cmdsync_domain::ports::providers::{CommandRegistryProvider, CommandTranslator};
use cmdsync_providers::{
    FileDigestStore, HttpClientConfig, HttpCommandRegistry, InMemoryCommandRegistry,
    InMemoryDigestStore, LocaleTableTranslator,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Application context holding the wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    commands: Arc<CommandStore>,
    registry: Arc<dyn CommandRegistryProvider>,
    digest_store: Arc<dyn DigestStoreProvider>,
    synchronizer: Arc<RegistrySynchronizer>,
    resolver: Arc<MentionResolver>,
    error_boundary: Arc<ErrorBoundary>,
}

impl AppContext {
    /// Declared command tree
    pub fn commands(&self) -> Arc<CommandStore> {
        Arc::clone(&self.commands)
    }

    /// Remote registry provider
    pub fn registry(&self) -> Arc<dyn CommandRegistryProvider> {
        Arc::clone(&self.registry)
    }

    /// Digest store
    pub fn digest_store(&self) -> Arc<dyn DigestStoreProvider> {
        Arc::clone(&self.digest_store)
    }

    /// Registry synchronizer
    pub fn synchronizer(&self) -> Arc<RegistrySynchronizer> {
        Arc::clone(&self.synchronizer)
    }

    /// Mention resolver
    pub fn resolver(&self) -> Arc<MentionResolver> {
        Arc::clone(&self.resolver)
    }

    /// Command failure boundary
    pub fn error_boundary(&self) -> Arc<ErrorBoundary> {
        Arc::clone(&self.error_boundary)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("registry", &self.registry.provider_name())
            .field("digest_store", &self.digest_store.provider_name())
            .finish_non_exhaustive()
    }
}

/// Initialize the application context for an already declared command tree
///
/// Runs a conditional sync when `sync.sync_on_startup` is set.
pub async fn init_app(config: AppConfig, commands: CommandStore) -> Result<AppContext> {
    info!(
        registry = %config.registry.provider,
        "Initializing command sync services"
    );

    let config = Arc::new(config);
    let commands = Arc::new(commands);

    let registry = create_registry(&config.registry)?;
    let digest_store = create_digest_store(&config.sync, &config.registry)?;
    let translator = create_translator(&config.translator).await?;

    let synchronizer = Arc::new(RegistrySynchronizer::new(
        Arc::clone(&commands),
        Arc::clone(&registry),
        Arc::clone(&digest_store),
        ChangeDetector::new(translator),
    ));
    let resolver = Arc::new(MentionResolver::new(
        Arc::clone(&commands),
        Arc::clone(&synchronizer) as Arc<dyn CommandSyncInterface>,
        config.resolver.fallback_to_global,
    ));

    let context = AppContext {
        config: Arc::clone(&config),
        commands,
        registry,
        digest_store,
        synchronizer,
        resolver,
        error_boundary: Arc::new(ErrorBoundary::default()),
    };

    if config.sync.sync_on_startup {
        let outcome = context.synchronizer.sync_if_changed().await?;
        if let SyncOutcome::Synced { registered, .. } = outcome {
            info!(registered, "Command tree synced on startup");
        }
    }

    Ok(context)
}

/// Initialize the application context from the configured manifest
///
/// An unset `commands.manifest_path` declares no commands.
pub async fn init_app_from_config(config: AppConfig) -> Result<AppContext> {
    let commands = match &config.commands.manifest_path {
        Some(path) => CommandManifest::from_file(path)?.into_store()?,
        None => CommandStore::new(),
    };
    init_app(config, commands).await
}

/// Build the registry provider named by the configuration
pub fn create_registry(config: &RegistryConfig) -> Result<Arc<dyn CommandRegistryProvider>> {
    match config.provider.as_str() {
        REGISTRY_PROVIDER_HTTP => {
            let timeout = Duration::from_secs(config.timeout_secs);
            let mut http = HttpClientConfig::with_timeout(timeout);
            if let Some(user_agent) = &config.user_agent {
                http.user_agent = user_agent.clone();
            }
            let client = http.build_client()?;
            Ok(Arc::new(HttpCommandRegistry::new(
                Some(config.api_base_url.clone()),
                config.application_id,
                config.token.clone(),
                timeout,
                client,
            )))
        }
        REGISTRY_PROVIDER_MEMORY => Ok(Arc::new(InMemoryCommandRegistry::new())),
        other => Err(Error::configuration(format!(
            "Unknown registry provider '{other}'"
        ))),
    }
}

/// Build the digest store matching the registry provider
pub fn create_digest_store(
    sync: &SyncConfig,
    registry: &RegistryConfig,
) -> Result<Arc<dyn DigestStoreProvider>> {
    if registry.provider == REGISTRY_PROVIDER_MEMORY {
        return Ok(Arc::new(InMemoryDigestStore::new()));
    }
    let store = match &sync.digest_path {
        Some(path) => FileDigestStore::new(path),
        None => FileDigestStore::at_default_location()?,
    };
    Ok(Arc::new(store))
}

/// Load the configured translator, if any
pub async fn create_translator(
    config: &TranslatorConfig,
) -> Result<Option<Arc<dyn CommandTranslator>>> {
    match &config.locales_path {
        Some(path) => {
            let translator = LocaleTableTranslator::from_file(path).await?;
            info!(
                locales = translator.locales().count(),
                "Loaded command translations"
            );
            Ok(Some(Arc::new(translator)))
        }
        None => Ok(None),
    }
}
