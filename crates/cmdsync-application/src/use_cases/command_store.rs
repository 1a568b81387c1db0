//! Command Declaration Store
//!
//! In-memory registry of the commands this process declares, keyed by scope.
//! Command modules populate it during startup; afterwards it is shared
//! read-only behind an `Arc`.

use cmdsync_domain::constants::{QUALIFIED_NAME_SEPARATOR, SCOPE_COMMANDS_MAX};
use cmdsync_domain::entities::{CommandDefinition, DeclaredCommand};
use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::value_objects::Scope;
use std::collections::BTreeMap;

/// Locally declared commands per scope
///
/// Top-level commands are kept sorted by name, which is the order both the
/// digest and the pushed payload use.
///
/// # Example
///
/// ```
/// use cmdsync_application::use_cases::CommandStore;
/// use cmdsync_domain::entities::CommandDefinition;
/// use cmdsync_domain::value_objects::Scope;
///
/// let mut store = CommandStore::new();
/// store
///     .add_command(
///         CommandDefinition::new("queue", "Queue controls")
///             .with_child(CommandDefinition::new("clear", "Empty the queue")),
///         Scope::Global,
///     )
///     .unwrap();
///
/// let clear = store.find(Scope::Global, "queue clear").unwrap();
/// assert_eq!(clear.root_parent(), Some("queue"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandStore {
    scopes: BTreeMap<Scope, BTreeMap<String, CommandDefinition>>,
}

impl CommandStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level command under `scope`
    ///
    /// Fails with `Error::InvalidCommand` when the definition breaks the
    /// registry's shape rules, when the name is already taken in the scope or
    /// when the scope is full.
    pub fn add_command(&mut self, command: CommandDefinition, scope: Scope) -> Result<()> {
        self.insert(command, scope, false)
    }

    /// Register a top-level command, replacing any command of the same name
    pub fn replace_command(&mut self, command: CommandDefinition, scope: Scope) -> Result<()> {
        self.insert(command, scope, true)
    }

    fn insert(&mut self, command: CommandDefinition, scope: Scope, replace: bool) -> Result<()> {
        command.validate()?;

        let exists = self.get_command(&command.name, scope).is_some();
        if exists && !replace {
            return Err(Error::invalid_command(format!(
                "command '{}' is already registered in scope {scope}",
                command.name
            )));
        }
        if !exists && self.len(scope) >= SCOPE_COMMANDS_MAX {
            return Err(Error::invalid_command(format!(
                "scope {scope} already holds {SCOPE_COMMANDS_MAX} commands"
            )));
        }
        self.scopes
            .entry(scope)
            .or_default()
            .insert(command.name.clone(), command);
        Ok(())
    }

    /// Remove a top-level command
    pub fn remove_command(&mut self, name: &str, scope: Scope) -> Option<CommandDefinition> {
        let commands = self.scopes.get_mut(&scope)?;
        let removed = commands.remove(name);
        if commands.is_empty() {
            self.scopes.remove(&scope);
        }
        removed
    }

    /// Remove every command of a scope
    pub fn clear(&mut self, scope: Scope) {
        self.scopes.remove(&scope);
    }

    /// Top-level command by name
    pub fn get_command(&self, name: &str, scope: Scope) -> Option<&CommandDefinition> {
        self.scopes.get(&scope)?.get(name)
    }

    /// Top-level commands of a scope, sorted by name
    pub fn commands(&self, scope: Scope) -> impl Iterator<Item = &CommandDefinition> {
        self.scopes
            .get(&scope)
            .into_iter()
            .flat_map(|commands| commands.values())
    }

    /// Number of top-level commands in a scope
    pub fn len(&self, scope: Scope) -> usize {
        self.scopes.get(&scope).map_or(0, BTreeMap::len)
    }

    /// Whether no scope holds any command
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Scopes holding at least one command
    pub fn scopes(&self) -> Vec<Scope> {
        self.scopes.keys().copied().collect()
    }

    /// Every node of every command in a scope, depth-first
    pub fn walk_commands(&self, scope: Scope) -> Vec<DeclaredCommand> {
        self.commands(scope)
            .flat_map(|command| command.walk(scope))
            .collect()
    }

    /// Declared command by qualified name, restricted to one scope
    pub fn find(&self, scope: Scope, qualified_name: &str) -> Option<DeclaredCommand> {
        let mut segments = qualified_name.split(QUALIFIED_NAME_SEPARATOR);
        let root = self.get_command(segments.next()?, scope)?;

        let mut definition = root;
        let mut declared = DeclaredCommand::root(&root.name, &root.description, scope);
        for segment in segments {
            definition = definition.child(segment)?;
            declared = declared.child(&definition.name, &definition.description);
        }
        Some(declared)
    }
}
