//! Registration scopes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a guild (tenant) on the remote platform
pub type GuildId = u64;

/// Scope under which commands are declared, registered and cached
///
/// `Global` commands are visible everywhere; `Guild` commands only inside one
/// guild. The scope doubles as the key of the remote command cache.
///
/// # Example
///
/// ```
/// use cmdsync_domain::value_objects::Scope;
///
/// assert_eq!(Scope::from(None), Scope::Global);
/// assert_eq!(Scope::from(Some(42)), Scope::Guild(42));
/// assert_eq!(Scope::Guild(42).to_string(), "guild:42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Visible in every guild and in direct messages
    #[default]
    Global,
    /// Visible in a single guild
    Guild(GuildId),
}

impl Scope {
    /// Guild id, or `None` for the global scope
    pub fn guild_id(self) -> Option<GuildId> {
        match self {
            Self::Global => None,
            Self::Guild(id) => Some(id),
        }
    }

    /// Whether this is the global scope
    pub fn is_global(self) -> bool {
        matches!(self, Self::Global)
    }
}

impl From<Option<GuildId>> for Scope {
    fn from(guild: Option<GuildId>) -> Self {
        guild.map_or(Self::Global, Self::Guild)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Guild(id) => write!(f, "guild:{id}"),
        }
    }
}
