//! Tests for command definitions: validation rules and payload shape

use cmdsync_domain::entities::{CommandDefinition, CommandOption, OptionType};
use cmdsync_domain::error::Error;
use serde_json::json;

fn queue_group() -> CommandDefinition {
    CommandDefinition::new("queue", "Inspect and edit the queue")
        .with_child(CommandDefinition::new("show", "Show the queue"))
        .with_child(
            CommandDefinition::new("remove", "Remove a track").with_option(
                CommandOption::new("position", "Track position", OptionType::Integer).required(),
            ),
        )
}

fn assert_invalid(command: &CommandDefinition) {
    match command.validate() {
        Err(Error::InvalidCommand { .. }) => {}
        other => panic!("Expected InvalidCommand, got {other:?}"),
    }
}

#[test]
fn test_valid_leaf_and_group() {
    let play = CommandDefinition::new("play", "Play a song").with_option(
        CommandOption::new("query", "Song to search for", OptionType::String)
            .required()
            .with_autocomplete(),
    );
    assert!(play.validate().is_ok());
    assert!(queue_group().validate().is_ok());
}

#[test]
fn test_name_rules() {
    assert_invalid(&CommandDefinition::new("Play", "Uppercase is rejected"));
    assert_invalid(&CommandDefinition::new("two words", "Spaces are rejected"));
    assert_invalid(&CommandDefinition::new("", "Empty is rejected"));
    assert_invalid(&CommandDefinition::new(&"a".repeat(33), "Too long"));
    assert!(
        CommandDefinition::new("lecture-aléatoire", "Non-ASCII letters are fine")
            .validate()
            .is_ok()
    );
}

#[test]
fn test_description_rules() {
    assert_invalid(&CommandDefinition::new("play", ""));
    assert_invalid(&CommandDefinition::new("play", "x".repeat(101)));
}

#[test]
fn test_group_cannot_have_options() {
    let group = queue_group().with_option(CommandOption::new(
        "verbose",
        "Verbose output",
        OptionType::Boolean,
    ));
    assert_invalid(&group);
}

#[test]
fn test_nesting_depth_limit() {
    let too_deep = CommandDefinition::new("a", "Level one").with_child(
        CommandDefinition::new("b", "Level two").with_child(
            CommandDefinition::new("c", "Level three")
                .with_child(CommandDefinition::new("d", "Level four")),
        ),
    );
    assert_invalid(&too_deep);

    let deepest_allowed = CommandDefinition::new("a", "Level one").with_child(
        CommandDefinition::new("b", "Level two")
            .with_child(CommandDefinition::new("c", "Level three")),
    );
    assert!(deepest_allowed.validate().is_ok());
}

#[test]
fn test_duplicate_children_rejected() {
    let group = CommandDefinition::new("queue", "Queue")
        .with_child(CommandDefinition::new("show", "Show"))
        .with_child(CommandDefinition::new("show", "Show again"));
    assert_invalid(&group);
}

#[test]
fn test_required_options_come_first() {
    let command = CommandDefinition::new("seek", "Seek")
        .with_option(CommandOption::new("unit", "Unit", OptionType::String))
        .with_option(CommandOption::new("position", "Position", OptionType::Integer).required());
    assert_invalid(&command);
}

#[test]
fn test_choice_rules() {
    let boolean_choices = CommandDefinition::new("loop", "Loop").with_option(
        CommandOption::new("enabled", "Enabled", OptionType::Boolean).with_choice("yes", true),
    );
    assert_invalid(&boolean_choices);

    let mismatched = CommandDefinition::new("volume", "Volume").with_option(
        CommandOption::new("level", "Level", OptionType::Integer).with_choice("loud", "100"),
    );
    assert_invalid(&mismatched);

    let valid = CommandDefinition::new("volume", "Volume").with_option(
        CommandOption::new("level", "Level", OptionType::Integer)
            .with_choice("quiet", 10)
            .with_choice("loud", 100),
    );
    assert!(valid.validate().is_ok());
}

#[test]
fn test_leaf_payload_shape() {
    let payload = CommandDefinition::new("play", "Play a song")
        .guild_only()
        .with_default_permissions(8)
        .with_option(CommandOption::new("query", "Song", OptionType::String).required())
        .to_payload();

    assert_eq!(payload["type"], json!(1));
    assert_eq!(payload["name"], json!("play"));
    assert_eq!(payload["dm_permission"], json!(false));
    assert_eq!(payload["default_member_permissions"], json!("8"));
    assert_eq!(payload["options"][0]["type"], json!(3));
    assert_eq!(payload["options"][0]["required"], json!(true));
}

#[test]
fn test_group_payload_nests_children_as_options() {
    let payload = queue_group().to_payload();
    let options = payload["options"].as_array().expect("options array");

    assert_eq!(options.len(), 2);
    assert_eq!(options[0]["type"], json!(1));
    assert_eq!(options[1]["name"], json!("remove"));
    assert_eq!(options[1]["options"][0]["type"], json!(4));
}

#[test]
fn test_localizations_in_payload() {
    let payload = CommandDefinition::new("play", "Play a song")
        .with_localization("fr", "jouer", "Jouer une chanson")
        .to_payload();
    assert_eq!(payload["name_localizations"]["fr"], json!("jouer"));
    assert_eq!(
        payload["description_localizations"]["fr"],
        json!("Jouer une chanson")
    );
}

#[test]
fn test_definition_deserializes_from_toml_like_json() {
    let definition: CommandDefinition = serde_json::from_value(json!({
        "name": "skip",
        "description": "Skip the current track",
        "options": [{"name": "count", "description": "Tracks", "type": "integer"}]
    }))
    .expect("definition should deserialize");

    assert_eq!(definition.options.len(), 1);
    assert!(!definition.options[0].required);
    assert!(definition.validate().is_ok());
}
