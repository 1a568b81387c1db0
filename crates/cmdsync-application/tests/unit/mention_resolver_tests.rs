//! Mention resolver tests

use std::sync::Arc;

use cmdsync_application::domain_services::{CommandSyncInterface, MentionResolverInterface};
use cmdsync_application::use_cases::{
    ChangeDetector, CommandStore, MentionResolver, RegistrySynchronizer,
};
use cmdsync_domain::entities::{CommandDefinition, DeclaredCommand};
use cmdsync_domain::value_objects::{CommandRef, RemoteCommand, Scope};
use cmdsync_providers::{InMemoryCommandRegistry, InMemoryDigestStore};

const GUILD_A: u64 = 1;
const GUILD_B: u64 = 2;

struct Harness {
    registry: Arc<InMemoryCommandRegistry>,
    sync: Arc<RegistrySynchronizer>,
    resolver: MentionResolver,
}

fn harness(store: CommandStore, first_id: u64, fallback_to_global: bool) -> Harness {
    let store = Arc::new(store);
    let registry = Arc::new(InMemoryCommandRegistry::with_starting_id(first_id));
    let sync = Arc::new(RegistrySynchronizer::new(
        store.clone(),
        registry.clone(),
        Arc::new(InMemoryDigestStore::new()),
        ChangeDetector::default(),
    ));
    let resolver = MentionResolver::new(store, sync.clone(), fallback_to_global);
    Harness {
        registry,
        sync,
        resolver,
    }
}

fn music_commands() -> CommandStore {
    let mut store = CommandStore::new();
    store
        .add_command(CommandDefinition::new("play", "Play a song"), Scope::Global)
        .expect("play");
    store
        .add_command(
            CommandDefinition::new("queue", "Inspect the queue")
                .with_child(CommandDefinition::new("clear", "Empty the queue")),
            Scope::Global,
        )
        .expect("queue");
    store
}

#[tokio::test]
async fn test_mention_after_sync() {
    let mut store = CommandStore::new();
    store
        .add_command(CommandDefinition::new("play", "Play a song"), Scope::Global)
        .expect("play");
    let h = harness(store, 42, true);

    h.sync.sync_if_changed().await.expect("sync");
    let mention = h
        .resolver
        .find_mention_for(CommandRef::Name("play"), None)
        .await
        .expect("resolve")
        .expect("registered");

    assert_eq!(mention.to_string(), "</play:42>");
    assert_eq!(h.registry.list_count(Scope::Global), 0);

    let stored = h.sync.persisted_digest().await.expect("digest");
    let rerun = h.sync.sync_if_changed().await.expect("rerun");
    assert!(!rerun.performed());
    assert_eq!(h.registry.declare_count(Scope::Global), 1);
    assert_eq!(h.sync.persisted_digest().await.expect("digest"), stored);
}

#[tokio::test]
async fn test_subcommand_uses_root_id() {
    let h = harness(music_commands(), 10, true);
    h.sync.push(Scope::Global).await.expect("push");
    let queue_id = h
        .sync
        .cached(Scope::Global)
        .and_then(|records| records.iter().find(|r| r.name == "queue").map(|r| r.id))
        .expect("queue registered");

    let mention = h
        .resolver
        .find_mention_for(CommandRef::Name("queue clear"), None)
        .await
        .expect("resolve")
        .expect("registered");
    assert_eq!(mention.to_string(), format!("</queue clear:{queue_id}>"));
}

#[tokio::test]
async fn test_cold_scope_is_fetched_once() {
    let h = harness(music_commands(), 1, true);
    h.registry.seed(
        Scope::Global,
        vec![RemoteCommand::new(77, "play", Scope::Global)],
    );

    for _ in 0..2 {
        let mention = h
            .resolver
            .find_mention_for(CommandRef::Name("play"), None)
            .await
            .expect("resolve")
            .expect("registered");
        assert_eq!(mention.id(), 77);
    }
    assert_eq!(h.registry.list_count(Scope::Global), 1);
}

#[tokio::test]
async fn test_undeclared_name_resolves_to_none_without_fetching() {
    let h = harness(music_commands(), 1, true);
    let mention = h
        .resolver
        .find_mention_for(CommandRef::Name("stop"), Some(GUILD_A))
        .await
        .expect("resolve");

    assert!(mention.is_none());
    assert_eq!(h.registry.list_count(Scope::Global), 0);
    assert_eq!(h.registry.list_count(Scope::Guild(GUILD_A)), 0);
}

#[tokio::test]
async fn test_declared_but_unregistered_is_none() {
    let h = harness(music_commands(), 1, true);
    let mention = h
        .resolver
        .find_mention_for(CommandRef::Name("play"), None)
        .await
        .expect("resolve");
    assert!(mention.is_none());
}

#[tokio::test]
async fn test_guild_scoped_command_is_invisible_elsewhere() {
    for fallback_to_global in [false, true] {
        let mut store = CommandStore::new();
        store
            .add_command(CommandDefinition::new("admin", "Administration"), Scope::Guild(GUILD_A))
            .expect("admin");
        let h = harness(store, 500, fallback_to_global);
        h.sync.sync_guild(GUILD_A).await.expect("guild push");

        let in_a = h
            .resolver
            .find_mention_for(CommandRef::Name("admin"), Some(GUILD_A))
            .await
            .expect("resolve");
        assert_eq!(in_a.map(|m| m.to_string()), Some("</admin:500>".to_string()));

        let in_b = h
            .resolver
            .find_mention_for(CommandRef::Name("admin"), Some(GUILD_B))
            .await
            .expect("resolve");
        assert!(in_b.is_none(), "fallback_to_global = {fallback_to_global}");

        let unscoped = h
            .resolver
            .find_mention_for(CommandRef::Name("admin"), None)
            .await
            .expect("resolve");
        assert!(unscoped.is_none());
    }
}

#[tokio::test]
async fn test_guild_lookup_prefers_guild_then_falls_back_to_global() {
    let mut store = music_commands();
    store
        .add_command(CommandDefinition::new("play", "Guild play"), Scope::Guild(GUILD_A))
        .expect("guild play");
    let h = harness(store, 1, false);
    h.registry.seed(
        Scope::Global,
        vec![RemoteCommand::new(11, "play", Scope::Global)],
    );
    h.registry.seed(
        Scope::Guild(GUILD_A),
        vec![RemoteCommand::new(22, "play", Scope::Guild(GUILD_A))],
    );
    h.registry.seed(Scope::Guild(GUILD_B), Vec::new());

    let in_a = h
        .resolver
        .find_mention_for(CommandRef::Name("play"), Some(GUILD_A))
        .await
        .expect("resolve")
        .expect("guild record");
    assert_eq!(in_a.id(), 22);

    // A guild lookup considers global even with fallback disabled
    let in_b = h
        .resolver
        .find_mention_for(CommandRef::Name("play"), Some(GUILD_B))
        .await
        .expect("resolve")
        .expect("global record");
    assert_eq!(in_b.id(), 11);
}

#[tokio::test]
async fn test_fallback_disabled_hides_global_from_unscoped_lookups() {
    let h = harness(music_commands(), 1, false);
    h.sync.push(Scope::Global).await.expect("push");

    assert!(!h.resolver.fallback_to_global());
    let mention = h
        .resolver
        .find_mention_for(CommandRef::Name("play"), None)
        .await
        .expect("resolve");
    assert!(mention.is_none());
}

#[tokio::test]
async fn test_resolve_command_by_name_and_handle() {
    let h = harness(music_commands(), 1, true);

    let by_name = h
        .resolver
        .resolve_command(CommandRef::Name("queue clear"), Some(GUILD_A))
        .expect("falls back to global");
    assert_eq!(by_name.scope(), Scope::Global);

    let handle = DeclaredCommand::root("play", "Play a song", Scope::Global);
    let by_handle = h
        .resolver
        .resolve_command(CommandRef::from(&handle), None)
        .expect("handle");
    assert_eq!(by_handle, handle);
}

#[tokio::test]
async fn test_registry_failure_propagates() {
    let h = harness(music_commands(), 1, true);
    h.registry.set_unavailable(true);

    let err = h
        .resolver
        .find_mention_for(CommandRef::Name("play"), None)
        .await
        .expect_err("registry down");
    assert!(err.is_transient());
    assert!(h.sync.cached(Scope::Global).is_none());
}
