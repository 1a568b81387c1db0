//! In-Memory Command Registry Provider
//!
//! Local stand-in for the remote registry. Useful for development, dry runs
//! and tests: it assigns identifiers, keeps them stable across re-declaration
//! of the same name, and counts calls per scope.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::ports::providers::CommandRegistryProvider;
use cmdsync_domain::value_objects::{CommandId, RemoteCommand, Scope};

use crate::constants::{IN_MEMORY_APPLICATION_ID, IN_MEMORY_FIRST_COMMAND_ID};

/// In-memory command registry
///
/// Thread-safe via `DashMap`; every scope is replaced wholesale on declare,
/// mirroring the bulk overwrite semantics of the REST API.
#[derive(Debug)]
pub struct InMemoryCommandRegistry {
    scopes: DashMap<Scope, Vec<RemoteCommand>>,
    next_id: AtomicU64,
    next_version: AtomicU64,
    declare_calls: DashMap<Scope, usize>,
    list_calls: DashMap<Scope, usize>,
    unavailable: AtomicBool,
}

impl Default for InMemoryCommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_starting_id(IN_MEMORY_FIRST_COMMAND_ID)
    }

    /// Create an empty registry that hands out identifiers from `first_id`
    pub fn with_starting_id(first_id: CommandId) -> Self {
        Self {
            scopes: DashMap::new(),
            next_id: AtomicU64::new(first_id),
            next_version: AtomicU64::new(1),
            declare_calls: DashMap::new(),
            list_calls: DashMap::new(),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Pre-populate a scope as if it had been declared earlier
    pub fn seed(&self, scope: Scope, records: Vec<RemoteCommand>) {
        self.scopes.insert(scope, records);
    }

    /// Make every call fail with a transient error until reset
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of declare calls made for `scope`
    pub fn declare_count(&self, scope: Scope) -> usize {
        self.declare_calls.get(&scope).map(|n| *n).unwrap_or(0)
    }

    /// Number of list calls made for `scope`
    pub fn list_count(&self, scope: Scope) -> usize {
        self.list_calls.get(&scope).map(|n| *n).unwrap_or(0)
    }

    /// Total declare calls across all scopes
    pub fn total_declare_count(&self) -> usize {
        self.declare_calls.iter().map(|entry| *entry.value()).sum()
    }

    /// Snapshot of the records currently held for `scope`
    pub fn records(&self, scope: Scope) -> Vec<RemoteCommand> {
        self.scopes
            .get(&scope)
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::registry_unavailable(
                "In-memory registry is marked unavailable",
            ));
        }
        Ok(())
    }

    fn payload_name(payload: &Value) -> Result<&str> {
        payload
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                Error::registry_rejected(Some(400), "command payload is missing a name")
            })
    }
}

#[async_trait]
impl CommandRegistryProvider for InMemoryCommandRegistry {
    async fn declare_commands(
        &self,
        scope: Scope,
        payloads: &[Value],
    ) -> Result<Vec<RemoteCommand>> {
        *self.declare_calls.entry(scope).or_insert(0) += 1;
        self.ensure_available()?;

        let mut seen = HashSet::new();
        for payload in payloads {
            let name = Self::payload_name(payload)?;
            if !seen.insert(name) {
                return Err(Error::registry_rejected(
                    Some(400),
                    format!("duplicate command name '{name}'"),
                ));
            }
        }

        let existing: HashMap<String, CommandId> = self
            .records(scope)
            .into_iter()
            .map(|record| (record.name, record.id))
            .collect();
        let version = self.next_version.fetch_add(1, Ordering::SeqCst);

        let mut records = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let name = Self::payload_name(payload)?;
            let id = existing
                .get(name)
                .copied()
                .unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst));
            records.push(RemoteCommand {
                id,
                name: name.to_string(),
                scope,
                application_id: Some(IN_MEMORY_APPLICATION_ID),
                version: Some(version),
            });
        }

        self.scopes.insert(scope, records.clone());
        Ok(records)
    }

    async fn list_commands(&self, scope: Scope) -> Result<Vec<RemoteCommand>> {
        *self.list_calls.entry(scope).or_insert(0) += 1;
        self.ensure_available()?;
        Ok(self.records(scope))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
