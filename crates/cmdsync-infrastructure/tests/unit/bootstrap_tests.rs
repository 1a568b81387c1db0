//! Service bootstrap tests

use cmdsync_application::domain_services::{CommandSyncInterface, MentionResolverInterface};
use cmdsync_application::use_cases::CommandStore;
use cmdsync_domain::entities::CommandDefinition;
use cmdsync_domain::value_objects::{CommandRef, Scope};
use cmdsync_infrastructure::bootstrap::{create_digest_store, create_registry};
use cmdsync_infrastructure::config::AppConfig;
use cmdsync_infrastructure::{init_app, init_app_from_config};
use tempfile::TempDir;

fn memory_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.registry.provider = "memory".to_string();
    config
}

fn declared() -> CommandStore {
    let mut store = CommandStore::new();
    store
        .add_command(CommandDefinition::new("play", "Play a song"), Scope::Global)
        .expect("declare");
    store
}

#[tokio::test]
async fn test_memory_registry_pairs_with_memory_digest_store() {
    let config = memory_config();
    let registry = create_registry(&config.registry).expect("registry");
    let store = create_digest_store(&config.sync, &config.registry).expect("store");

    assert_eq!(registry.provider_name(), "memory");
    assert_eq!(store.provider_name(), "memory");
}

#[tokio::test]
async fn test_http_registry_uses_configured_digest_path() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = AppConfig::default();
    config.registry.application_id = 1;
    config.registry.token = "token".to_string();
    config.sync.digest_path = Some(dir.path().join("tree.hash"));

    let registry = create_registry(&config.registry).expect("registry");
    let store = create_digest_store(&config.sync, &config.registry).expect("store");
    assert_eq!(registry.provider_name(), "http");
    assert_eq!(store.provider_name(), "file");
    assert_eq!(store.load().await.expect("load"), None);
    assert!(dir.path().join("tree.hash").exists());
}

#[tokio::test]
async fn test_unknown_registry_is_rejected() {
    let mut config = AppConfig::default();
    config.registry.provider = "smtp".to_string();
    assert!(create_registry(&config.registry).is_err());
}

#[tokio::test]
async fn test_init_app_without_startup_sync_pushes_nothing() {
    let context = init_app(memory_config(), declared()).await.expect("init");

    assert!(context.synchronizer().cached(Scope::Global).is_none());
    assert!(context.synchronizer().persisted_digest().await.expect("digest").is_none());
}

#[tokio::test]
async fn test_startup_sync_registers_commands() {
    let mut config = memory_config();
    config.sync.sync_on_startup = true;
    let context = init_app(config, declared()).await.expect("init");

    let sync = context.synchronizer();
    let current = sync.current_digest().await.expect("current");
    assert_eq!(sync.persisted_digest().await.expect("persisted"), Some(current));

    let mention = context
        .resolver()
        .find_mention_for(CommandRef::Name("play"), None)
        .await
        .expect("resolve")
        .expect("registered");
    assert_eq!(mention.qualified_name(), "play");
}

#[tokio::test]
async fn test_init_from_manifest_and_locales() {
    let dir = TempDir::new().expect("temp dir");
    let manifest = dir.path().join("commands.toml");
    let locales = dir.path().join("locales.toml");
    std::fs::write(
        &manifest,
        "[[commands]]\nname = \"play\"\ndescription = \"Play a song\"\n",
    )
    .expect("write manifest");
    std::fs::write(&locales, "[de]\nplay = \"abspielen\"\n").expect("write locales");

    let mut config = memory_config();
    config.commands.manifest_path = Some(manifest);
    config.translator.locales_path = Some(locales);

    let context = init_app_from_config(config).await.expect("init");
    assert_eq!(context.commands().len(Scope::Global), 1);

    let records = context.synchronizer().push(Scope::Global).await.expect("push");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_missing_manifest_fails_init() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = memory_config();
    config.commands.manifest_path = Some(dir.path().join("absent.toml"));
    assert!(init_app_from_config(config).await.is_err());
}
