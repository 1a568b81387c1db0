//! Command definitions
//!
//! A [`CommandDefinition`] is the tree a command module registers at startup:
//! either a plain chat-input command with typed options, or a group whose
//! children are subcommands or subcommand groups. The definition renders to
//! the registry's JSON shape through [`CommandDefinition::to_payload`], which
//! is also the canonical form hashed by the change detector.

use super::DeclaredCommand;
use crate::constants::{
    COMMAND_DESCRIPTION_MAX_LENGTH, COMMAND_OPTIONS_MAX, COMMAND_TREE_MAX_DEPTH,
    OPTION_CHOICES_MAX, QUALIFIED_NAME_SEPARATOR,
};
use crate::error::{Error, Result};
use crate::value_objects::Scope;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// Locale code (e.g. `fr`, `pt-BR`) to localized string
pub type Localizations = BTreeMap<String, String>;

/// Registry payload type of a chat-input command and of a subcommand
const PAYLOAD_TYPE_COMMAND: u8 = 1;
/// Registry payload type of a subcommand group
const PAYLOAD_TYPE_GROUP: u8 = 2;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-_\p{L}\p{N}\p{Devanagari}\p{Thai}]{1,32}$")
        .unwrap_or_else(|e| panic!("command name pattern must compile: {e}"))
});

/// Option value types understood by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Free-form text
    String,
    /// Whole number
    Integer,
    /// True / false
    Boolean,
    /// A user of the guild
    User,
    /// A channel of the guild
    Channel,
    /// A role of the guild
    Role,
    /// A user or a role
    Mentionable,
    /// Floating point number
    Number,
    /// An uploaded file
    Attachment,
}

impl OptionType {
    /// Numeric code used in registry payloads
    pub fn code(self) -> u8 {
        match self {
            Self::String => 3,
            Self::Integer => 4,
            Self::Boolean => 5,
            Self::User => 6,
            Self::Channel => 7,
            Self::Role => 8,
            Self::Mentionable => 9,
            Self::Number => 10,
            Self::Attachment => 11,
        }
    }

    /// Whether a fixed list of choices can be attached to the option
    pub fn supports_choices(self) -> bool {
        matches!(self, Self::String | Self::Integer | Self::Number)
    }
}

/// Predefined value offered for an option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionChoice {
    /// Display name of the choice
    pub name: String,
    /// Value sent back when the choice is picked (string or number)
    pub value: Value,
    /// Localized display names
    #[serde(default)]
    pub name_localizations: Localizations,
}

/// Typed parameter of a chat-input command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Value type
    #[serde(rename = "type")]
    pub kind: OptionType,
    /// Whether the parameter must be supplied
    #[serde(default)]
    pub required: bool,
    /// Whether values are suggested dynamically while typing
    #[serde(default)]
    pub autocomplete: bool,
    /// Fixed list of accepted values
    #[serde(default)]
    pub choices: Vec<OptionChoice>,
    /// Localized names
    #[serde(default)]
    pub name_localizations: Localizations,
    /// Localized descriptions
    #[serde(default)]
    pub description_localizations: Localizations,
}

impl CommandOption {
    /// Create an optional parameter of the given type
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: OptionType) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: false,
            autocomplete: false,
            choices: Vec::new(),
            name_localizations: Localizations::new(),
            description_localizations: Localizations::new(),
        }
    }

    /// Mark the parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Enable autocomplete suggestions
    pub fn with_autocomplete(mut self) -> Self {
        self.autocomplete = true;
        self
    }

    /// Add a fixed choice
    pub fn with_choice(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.choices.push(OptionChoice {
            name: name.into(),
            value: value.into(),
            name_localizations: Localizations::new(),
        });
        self
    }

    fn validate(&self, path: &str) -> Result<()> {
        let path = format!("{path}{QUALIFIED_NAME_SEPARATOR}{}", self.name);
        validate_name(&self.name, &path)?;
        validate_description(&self.description, &path)?;

        if self.choices.is_empty() {
            return Ok(());
        }
        if !self.kind.supports_choices() {
            return Err(Error::invalid_command(format!(
                "option '{path}' of type {:?} cannot have choices",
                self.kind
            )));
        }
        if self.autocomplete {
            return Err(Error::invalid_command(format!(
                "option '{path}' cannot combine choices with autocomplete"
            )));
        }
        if self.choices.len() > OPTION_CHOICES_MAX {
            return Err(Error::invalid_command(format!(
                "option '{path}' has {} choices, at most {OPTION_CHOICES_MAX} are allowed",
                self.choices.len()
            )));
        }
        for choice in &self.choices {
            let valid = match self.kind {
                OptionType::String => choice.value.is_string(),
                OptionType::Integer => choice.value.is_i64() || choice.value.is_u64(),
                _ => choice.value.is_number(),
            };
            if !valid {
                return Err(Error::invalid_command(format!(
                    "choice '{}' of option '{path}' does not match type {:?}",
                    choice.name, self.kind
                )));
            }
        }
        Ok(())
    }

    fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("type".into(), json!(self.kind.code()));
        payload.insert("name".into(), json!(self.name));
        payload.insert("description".into(), json!(self.description));
        payload.insert("required".into(), json!(self.required));
        payload.insert("name_localizations".into(), json!(self.name_localizations));
        payload.insert(
            "description_localizations".into(),
            json!(self.description_localizations),
        );
        if self.autocomplete {
            payload.insert("autocomplete".into(), json!(true));
        }
        if !self.choices.is_empty() {
            payload.insert("choices".into(), json!(self.choices));
        }
        Value::Object(payload)
    }
}

/// A locally declared command tree
///
/// A node with children is a group: its children are subcommands (leaves) or
/// subcommand groups (which hold leaves in turn). Leaves carry options.
///
/// # Example
///
/// ```
/// use cmdsync_domain::entities::{CommandDefinition, CommandOption, OptionType};
///
/// let play = CommandDefinition::new("play", "Play a song")
///     .with_option(CommandOption::new("query", "What to play", OptionType::String).required());
/// assert!(play.validate().is_ok());
///
/// let queue = CommandDefinition::new("queue", "Inspect the queue")
///     .with_child(CommandDefinition::new("clear", "Empty the queue"));
/// assert!(queue.is_group());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Command name (one segment of the qualified name)
    pub name: String,
    /// Command description
    pub description: String,
    /// Parameters (leaves only)
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// Subcommands and subcommand groups
    #[serde(default)]
    pub children: Vec<CommandDefinition>,
    /// Age-restricted command
    #[serde(default)]
    pub nsfw: bool,
    /// Hidden from direct messages
    #[serde(default)]
    pub guild_only: bool,
    /// Permission bit set required by default to see the command
    #[serde(default)]
    pub default_member_permissions: Option<u64>,
    /// Localized names
    #[serde(default)]
    pub name_localizations: Localizations,
    /// Localized descriptions
    #[serde(default)]
    pub description_localizations: Localizations,
}

impl CommandDefinition {
    /// Create a leaf command without options
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
            children: Vec::new(),
            nsfw: false,
            guild_only: false,
            default_member_permissions: None,
            name_localizations: Localizations::new(),
            description_localizations: Localizations::new(),
        }
    }

    /// Add a parameter
    pub fn with_option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add a subcommand or subcommand group
    pub fn with_child(mut self, child: CommandDefinition) -> Self {
        self.children.push(child);
        self
    }

    /// Restrict the command to guilds
    pub fn guild_only(mut self) -> Self {
        self.guild_only = true;
        self
    }

    /// Require a permission bit set by default
    pub fn with_default_permissions(mut self, permissions: u64) -> Self {
        self.default_member_permissions = Some(permissions);
        self
    }

    /// Add a localized name and description
    pub fn with_localization(
        mut self,
        locale: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let locale = locale.into();
        self.name_localizations.insert(locale.clone(), name.into());
        self.description_localizations
            .insert(locale, description.into());
        self
    }

    /// Whether this node groups subcommands
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find a direct child by name
    pub fn child(&self, name: &str) -> Option<&CommandDefinition> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Check the tree against the registry's shape rules
    pub fn validate(&self) -> Result<()> {
        self.validate_node("", 1)
    }

    fn validate_node(&self, parent: &str, depth: usize) -> Result<()> {
        let path = if parent.is_empty() {
            self.name.clone()
        } else {
            format!("{parent}{QUALIFIED_NAME_SEPARATOR}{}", self.name)
        };
        validate_name(&self.name, &path)?;
        validate_description(&self.description, &path)?;

        if self.is_group() {
            if depth >= COMMAND_TREE_MAX_DEPTH {
                return Err(Error::invalid_command(format!(
                    "'{path}' nests deeper than {COMMAND_TREE_MAX_DEPTH} levels"
                )));
            }
            if !self.options.is_empty() {
                return Err(Error::invalid_command(format!(
                    "group '{path}' cannot declare options"
                )));
            }
            check_count(self.children.len(), &path, "children")?;
            check_unique(self.children.iter().map(|c| c.name.as_str()), &path)?;
            for child in &self.children {
                child.validate_node(&path, depth + 1)?;
            }
            return Ok(());
        }

        check_count(self.options.len(), &path, "options")?;
        check_unique(self.options.iter().map(|o| o.name.as_str()), &path)?;
        let mut seen_optional = false;
        for option in &self.options {
            if option.required && seen_optional {
                return Err(Error::invalid_command(format!(
                    "required option '{}' of '{path}' follows an optional one",
                    option.name
                )));
            }
            seen_optional |= !option.required;
            option.validate(&path)?;
        }
        Ok(())
    }

    /// Canonical registry payload of a top-level command
    pub fn to_payload(&self) -> Value {
        let mut payload = Map::new();
        payload.insert("type".into(), json!(PAYLOAD_TYPE_COMMAND));
        payload.insert("name".into(), json!(self.name));
        payload.insert("description".into(), json!(self.description));
        payload.insert("options".into(), Value::Array(self.option_payloads()));
        payload.insert("nsfw".into(), json!(self.nsfw));
        payload.insert("dm_permission".into(), json!(!self.guild_only));
        payload.insert(
            "default_member_permissions".into(),
            json!(self.default_member_permissions.map(|p| p.to_string())),
        );
        payload.insert("name_localizations".into(), json!(self.name_localizations));
        payload.insert(
            "description_localizations".into(),
            json!(self.description_localizations),
        );
        Value::Object(payload)
    }

    fn child_payload(&self) -> Value {
        let kind = if self.is_group() {
            PAYLOAD_TYPE_GROUP
        } else {
            PAYLOAD_TYPE_COMMAND
        };
        json!({
            "type": kind,
            "name": self.name,
            "description": self.description,
            "options": self.option_payloads(),
            "name_localizations": self.name_localizations,
            "description_localizations": self.description_localizations,
        })
    }

    fn option_payloads(&self) -> Vec<Value> {
        if self.is_group() {
            self.children.iter().map(Self::child_payload).collect()
        } else {
            self.options.iter().map(CommandOption::to_payload).collect()
        }
    }

    /// Every node of the tree as a declared command, depth-first
    pub fn walk(&self, scope: Scope) -> Vec<DeclaredCommand> {
        let mut out = Vec::new();
        self.collect(scope, None, &mut out);
        out
    }

    fn collect(
        &self,
        scope: Scope,
        parent: Option<&DeclaredCommand>,
        out: &mut Vec<DeclaredCommand>,
    ) {
        let node = match parent {
            None => DeclaredCommand::root(&self.name, &self.description, scope),
            Some(parent) => parent.child(&self.name, &self.description),
        };
        out.push(node.clone());
        for child in &self.children {
            child.collect(scope, Some(&node), out);
        }
    }
}

fn validate_name(name: &str, path: &str) -> Result<()> {
    if !NAME_PATTERN.is_match(name) {
        return Err(Error::invalid_command(format!(
            "'{path}': name '{name}' must be 1-32 letters, digits, '-' or '_'"
        )));
    }
    if name.to_lowercase() != name {
        return Err(Error::invalid_command(format!(
            "'{path}': name '{name}' must be lowercase"
        )));
    }
    Ok(())
}

fn validate_description(description: &str, path: &str) -> Result<()> {
    let length = description.chars().count();
    if length == 0 || length > COMMAND_DESCRIPTION_MAX_LENGTH {
        return Err(Error::invalid_command(format!(
            "'{path}': description must be 1-{COMMAND_DESCRIPTION_MAX_LENGTH} characters, got {length}"
        )));
    }
    Ok(())
}

fn check_count(count: usize, path: &str, what: &str) -> Result<()> {
    if count > COMMAND_OPTIONS_MAX {
        return Err(Error::invalid_command(format!(
            "'{path}' has {count} {what}, at most {COMMAND_OPTIONS_MAX} are allowed"
        )));
    }
    Ok(())
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>, path: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(Error::invalid_command(format!(
                "'{path}' declares '{name}' more than once"
            )));
        }
    }
    Ok(())
}
