//! Command manifest loading
//!
//! A manifest declares the command tree in TOML, one `[[commands]]` table
//! per top-level command. A `guild` key makes the command guild-scoped;
//! without it the command is global.
//!
//! ```toml
//! [[commands]]
//! name = "play"
//! description = "Play a song"
//!
//! [[commands.options]]
//! name = "query"
//! description = "What to play"
//! type = "string"
//! required = true
//!
//! [[commands]]
//! guild = 123456789012345678
//! name = "admin"
//! description = "Server administration"
//! ```

use crate::error_ext::ErrorContext;
use cmdsync_application::use_cases::CommandStore;
use cmdsync_domain::entities::CommandDefinition;
use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::value_objects::{GuildId, Scope};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One declared top-level command and its scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Guild the command is registered in, global when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<GuildId>,

    /// The command tree
    #[serde(flatten)]
    pub command: CommandDefinition,
}

impl ManifestEntry {
    /// Scope the command is declared in
    pub fn scope(&self) -> Scope {
        Scope::from(self.guild)
    }
}

/// Parsed command manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandManifest {
    /// Declared commands in file order
    #[serde(default)]
    pub commands: Vec<ManifestEntry>,
}

impl CommandManifest {
    /// Parse a manifest from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::invalid_command(format!("Invalid command manifest: {e}")))
    }

    /// Read and parse a manifest file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .io_context(format!("Failed to read command manifest {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Declare every command into a new store
    ///
    /// Fails on the first command that does not validate or that duplicates a
    /// name already declared in the same scope.
    pub fn into_store(self) -> Result<CommandStore> {
        let mut store = CommandStore::new();
        for entry in self.commands {
            let scope = entry.scope();
            debug!(command = %entry.command.name, %scope, "Declaring command");
            store.add_command(entry.command, scope)?;
        }
        Ok(store)
    }
}
