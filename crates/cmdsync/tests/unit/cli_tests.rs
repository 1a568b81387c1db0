//! Command line parsing and execution tests

use clap::Parser;
use cmdsync::application::CommandStore;
use cmdsync::cli::{Cli, Command, execute};
use cmdsync::infrastructure::{AppConfig, init_app};
use cmdsync::{CommandDefinition, Scope};

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
        .add_command(
            CommandDefinition::new("queue", "Inspect the queue")
                .with_child(CommandDefinition::new("clear", "Empty the queue")),
            Scope::Global,
        )
        .expect("declare");
    store
        .add_command(CommandDefinition::new("admin", "Administration"), Scope::Guild(9))
        .expect("declare");
    store
}

#[test]
fn test_parse_sync_flags() {
    let cli = Cli::try_parse_from(["cmdsync", "sync", "--force"]).expect("parse");
    assert_eq!(
        cli.command,
        Command::Sync {
            force: true,
            guild: None
        }
    );

    let cli = Cli::try_parse_from(["cmdsync", "--config", "c.toml", "sync", "--guild", "12"])
        .expect("parse");
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("c.toml")));
    assert_eq!(
        cli.command,
        Command::Sync {
            force: false,
            guild: Some(12)
        }
    );

    assert!(Cli::try_parse_from(["cmdsync", "sync", "--force", "--guild", "1"]).is_err());
}

#[test]
fn test_parse_mention_joins_words() {
    let cli = Cli::try_parse_from(["cmdsync", "mention", "queue", "clear"]).expect("parse");
    match cli.command {
        Command::Mention { name, guild } => {
            assert_eq!(name, vec!["queue".to_string(), "clear".to_string()]);
            assert_eq!(guild, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
    assert!(Cli::try_parse_from(["cmdsync", "mention"]).is_err());
}

#[tokio::test]
async fn test_sync_then_skip() {
    let context = init_app(memory_config(), declared()).await.expect("init");
    let sync = Command::Sync {
        force: false,
        guild: None,
    };

    let first = execute(&context, &sync).await.expect("sync");
    assert!(first.starts_with("Synced 2 command(s)"), "{first}");

    let second = execute(&context, &sync).await.expect("sync");
    assert!(second.starts_with("Command tree unchanged"), "{second}");

    let forced = execute(
        &context,
        &Command::Sync {
            force: true,
            guild: None,
        },
    )
    .await
    .expect("force");
    assert!(forced.starts_with("Synced 2 command(s)"), "{forced}");
}

#[tokio::test]
async fn test_digest_report() {
    let context = init_app(memory_config(), declared()).await.expect("init");
    let report = execute(&context, &Command::Digest).await.expect("digest");
    assert!(report.contains("persisted: none"), "{report}");
}

#[tokio::test]
async fn test_guild_sync_fetch_and_mention() {
    let context = init_app(memory_config(), declared()).await.expect("init");

    let pushed = execute(
        &context,
        &Command::Sync {
            force: false,
            guild: Some(9),
        },
    )
    .await
    .expect("guild sync");
    assert_eq!(pushed, "Registered 1 command(s) in guild 9");

    let listed = execute(&context, &Command::Fetch { guild: Some(9) })
        .await
        .expect("fetch");
    assert!(listed.contains("admin"), "{listed}");

    let mention = execute(
        &context,
        &Command::Mention {
            name: vec!["admin".to_string()],
            guild: Some(9),
        },
    )
    .await
    .expect("mention");
    assert!(mention.starts_with("</admin:"), "{mention}");
}

#[tokio::test]
async fn test_mention_of_unregistered_command() {
    let context = init_app(memory_config(), declared()).await.expect("init");
    let report = execute(
        &context,
        &Command::Mention {
            name: vec!["queue".to_string(), "clear".to_string()],
            guild: None,
        },
    )
    .await
    .expect("mention");
    assert_eq!(report, "No registered command matches 'queue clear'");
}
