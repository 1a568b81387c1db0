//! Configuration loader tests

use cmdsync_domain::error::Error;
use cmdsync_infrastructure::config::{AppConfig, ConfigLoader};
use figment::Jail;
use tempfile::TempDir;

const HTTP_CONFIG: &str = r#"
[registry]
provider = "http"
application_id = 42
token = "file-token"

[resolver]
fallback_to_global = false
"#;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.registry.provider, "http");
    assert!(config.resolver.fallback_to_global);
    assert!(!config.sync.sync_on_startup);
    assert!(config.sync.digest_path.is_none());
}

#[test]
fn test_file_is_merged_over_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("cmdsync.toml", HTTP_CONFIG)?;
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;

        assert_eq!(config.registry.application_id, 42);
        assert_eq!(config.registry.token, "file-token");
        assert!(!config.resolver.fallback_to_global);
        assert_eq!(config.registry.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("cmdsync.toml", HTTP_CONFIG)?;
        jail.set_env("CMDSYNC_REGISTRY__TOKEN", "env-token");
        jail.set_env("CMDSYNC_REGISTRY__APPLICATION_ID", "77");
        jail.set_env("CMDSYNC_SYNC__SYNC_ON_STARTUP", "true");

        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.registry.token, "env-token");
        assert_eq!(config.registry.application_id, 77);
        assert!(config.sync.sync_on_startup);
        Ok(())
    });
}

#[test]
fn test_http_provider_requires_credentials() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new().load().expect_err("no token configured");
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}

#[test]
fn test_memory_provider_needs_no_credentials() {
    Jail::expect_with(|jail| {
        jail.set_env("CMDSYNC_REGISTRY__PROVIDER", "memory");
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config.registry.provider, "memory");
        Ok(())
    });
}

#[test]
fn test_invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("CMDSYNC_REGISTRY__PROVIDER", "carrier-pigeon");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("CMDSYNC_REGISTRY__PROVIDER", "memory");
        jail.set_env("CMDSYNC_LOGGING__LEVEL", "loud");
        assert!(ConfigLoader::new().load().is_err());

        jail.set_env("CMDSYNC_LOGGING__LEVEL", "debug");
        jail.set_env("CMDSYNC_REGISTRY__TIMEOUT_SECS", "0");
        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .expect_err("missing file");
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("saved.toml");

    let mut config = AppConfig::default();
    config.registry.provider = "memory".to_string();
    config.resolver.fallback_to_global = false;

    let loader = ConfigLoader::new().with_env_prefix("CMDSYNC_TEST_UNUSED");
    loader.save_to_file(&config, &path).expect("save");

    let loaded = ConfigLoader::new()
        .with_env_prefix("CMDSYNC_TEST_UNUSED")
        .with_config_path(&path)
        .load()
        .expect("load");
    assert_eq!(loaded, config);
}
