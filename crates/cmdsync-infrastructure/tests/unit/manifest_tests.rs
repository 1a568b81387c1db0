//! Command manifest tests

use cmdsync_domain::entities::command::OptionType;
use cmdsync_domain::error::Error;
use cmdsync_domain::value_objects::Scope;
use cmdsync_infrastructure::manifest::CommandManifest;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[[commands]]
name = "play"
description = "Play a song"

[[commands.options]]
name = "query"
description = "What to play"
type = "string"
required = true

[[commands]]
name = "queue"
description = "Inspect the queue"

[[commands.children]]
name = "clear"
description = "Empty the queue"

[[commands]]
guild = 123456789012345678
name = "admin"
description = "Server administration"
default_member_permissions = 8
"#;

#[test]
fn test_parse_scopes_and_trees() {
    let manifest = CommandManifest::from_toml_str(MANIFEST).expect("manifest");
    assert_eq!(manifest.commands.len(), 3);

    let play = &manifest.commands[0];
    assert_eq!(play.scope(), Scope::Global);
    assert_eq!(play.command.options[0].kind, OptionType::String);
    assert!(play.command.options[0].required);

    assert!(manifest.commands[1].command.is_group());

    let admin = &manifest.commands[2];
    assert_eq!(admin.scope(), Scope::Guild(123_456_789_012_345_678));
    assert_eq!(admin.command.default_member_permissions, Some(8));
}

#[test]
fn test_into_store() {
    let store = CommandManifest::from_toml_str(MANIFEST)
        .expect("manifest")
        .into_store()
        .expect("store");

    assert_eq!(store.len(Scope::Global), 2);
    assert_eq!(store.len(Scope::Guild(123_456_789_012_345_678)), 1);
    assert!(store.find(Scope::Global, "queue clear").is_some());
}

#[test]
fn test_duplicate_declaration_fails() {
    let manifest = CommandManifest::from_toml_str(
        r#"
[[commands]]
name = "play"
description = "Play a song"

[[commands]]
name = "play"
description = "Play it again"
"#,
    )
    .expect("manifest");
    assert!(matches!(
        manifest.into_store(),
        Err(Error::InvalidCommand { .. })
    ));
}

#[test]
fn test_invalid_command_name_fails() {
    let manifest = CommandManifest::from_toml_str(
        r#"
[[commands]]
name = "Play"
description = "Uppercase is not allowed"
"#,
    )
    .expect("manifest");
    assert!(manifest.into_store().is_err());
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("commands.toml");
    std::fs::write(&path, MANIFEST).expect("write");

    let manifest = CommandManifest::from_file(&path).expect("manifest");
    assert_eq!(manifest.commands.len(), 3);

    let missing = CommandManifest::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(missing, Err(Error::Io { .. })));
}
