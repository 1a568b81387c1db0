//! Records returned by the remote command registry

use super::Scope;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a command by the remote registry
pub type CommandId = u64;

/// The registry's record of a registered command
///
/// Only ever produced by a registry provider in response to a push or a
/// fetch; the core never fabricates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCommand {
    /// Remote-assigned identifier
    pub id: CommandId,

    /// Top-level command name
    pub name: String,

    /// Scope the command was registered under
    pub scope: Scope,

    /// Application that owns the command, when reported
    pub application_id: Option<u64>,

    /// Registry-side version, bumped on every change
    pub version: Option<u64>,
}

impl RemoteCommand {
    /// Create a record with only the fields the resolver relies on
    pub fn new(id: CommandId, name: impl Into<String>, scope: Scope) -> Self {
        Self {
            id,
            name: name.into(),
            scope,
            application_id: None,
            version: None,
        }
    }
}
