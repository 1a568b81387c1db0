//! Declared commands
//!
//! Flat view of one node of a [`CommandDefinition`](super::CommandDefinition)
//! tree, used for lookups by qualified name.

use crate::constants::QUALIFIED_NAME_SEPARATOR;
use crate::value_objects::Scope;
use serde::{Deserialize, Serialize};

/// A locally declared command node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclaredCommand {
    qualified_name: String,
    root_parent: Option<String>,
    scope: Scope,
    description: String,
}

impl DeclaredCommand {
    /// Top-level command
    pub fn root(name: &str, description: &str, scope: Scope) -> Self {
        Self {
            qualified_name: name.to_string(),
            root_parent: None,
            scope,
            description: description.to_string(),
        }
    }

    /// Child of this node
    pub fn child(&self, name: &str, description: &str) -> Self {
        let root = self
            .root_parent
            .clone()
            .unwrap_or_else(|| self.qualified_name.clone());
        Self {
            qualified_name: format!("{}{QUALIFIED_NAME_SEPARATOR}{name}", self.qualified_name),
            root_parent: Some(root),
            scope: self.scope,
            description: description.to_string(),
        }
    }

    /// Space-joined path from the root to this node
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Last segment of the qualified name
    pub fn name(&self) -> &str {
        self.qualified_name
            .rsplit(QUALIFIED_NAME_SEPARATOR)
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Name of the top-level command this node belongs to, `None` for a root
    pub fn root_parent(&self) -> Option<&str> {
        self.root_parent.as_deref()
    }

    /// Name the remote registry knows this node by
    ///
    /// Subcommands are not registered on their own; they share the record of
    /// their top-level group.
    pub fn registry_name(&self) -> &str {
        self.root_parent().unwrap_or(&self.qualified_name)
    }

    /// Scope the command was declared under
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Command description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Nesting level, 1 for a top-level command
    pub fn depth(&self) -> usize {
        self.qualified_name
            .matches(QUALIFIED_NAME_SEPARATOR)
            .count()
            + 1
    }
}
