//! Command mentions and command references

use super::CommandId;
use crate::entities::DeclaredCommand;
use std::fmt;

/// Renderable reference to a registered command
///
/// Displays as `</qualified name:id>`, the form chat clients turn into a
/// clickable command link.
///
/// # Example
///
/// ```
/// use cmdsync_domain::value_objects::Mention;
///
/// let mention = Mention::new("music queue", 42);
/// assert_eq!(mention.to_string(), "</music queue:42>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    qualified_name: String,
    id: CommandId,
}

impl Mention {
    /// Create a mention for a qualified command name and a remote id
    pub fn new(qualified_name: impl Into<String>, id: CommandId) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            id,
        }
    }

    /// Full qualified name of the mentioned command
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Remote id of the top-level command the mention points at
    pub fn id(&self) -> CommandId {
        self.id
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "</{}:{}>", self.qualified_name, self.id)
    }
}

/// Input accepted by the mention resolver
#[derive(Debug, Clone, Copy)]
pub enum CommandRef<'a> {
    /// Qualified name to look up among the declared commands
    Name(&'a str),
    /// Already resolved declared command
    Declared(&'a DeclaredCommand),
}

impl<'a> From<&'a str> for CommandRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for CommandRef<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name.as_str())
    }
}

impl<'a> From<&'a DeclaredCommand> for CommandRef<'a> {
    fn from(command: &'a DeclaredCommand) -> Self {
        Self::Declared(command)
    }
}
