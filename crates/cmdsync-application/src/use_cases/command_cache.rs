//! Scoped cache of remote command records

use cmdsync_domain::value_objects::{RemoteCommand, Scope};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
struct CachedScope {
    generation: u64,
    records: Arc<[RemoteCommand]>,
}

/// Last known remote state per scope
///
/// Entries are replaced whole on every push or fetch and never merged, so a
/// reader sees either the previous list or the new one. Nothing expires: an
/// entry stays valid until the next refresh.
///
/// Every replacement bumps the scope's generation. A fetch records the
/// generation before it goes to the network and only lands if nothing
/// replaced the entry in the meantime.
#[derive(Debug, Default)]
pub struct ScopedCommandCache {
    entries: DashMap<Scope, CachedScope>,
}

impl ScopedCommandCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached records of a scope
    pub fn get(&self, scope: Scope) -> Option<Arc<[RemoteCommand]>> {
        self.entries
            .get(&scope)
            .map(|entry| Arc::clone(&entry.value().records))
    }

    /// Number of replacements a scope has seen, 0 when never filled
    pub fn generation(&self, scope: Scope) -> u64 {
        self.entries.get(&scope).map_or(0, |entry| entry.generation)
    }

    /// Replace the records of a scope
    pub fn replace(&self, scope: Scope, records: Vec<RemoteCommand>) -> Arc<[RemoteCommand]> {
        let records: Arc<[RemoteCommand]> = records.into();
        self.entries
            .entry(scope)
            .and_modify(|entry| {
                entry.generation += 1;
                entry.records = Arc::clone(&records);
            })
            .or_insert_with(|| CachedScope {
                generation: 1,
                records: Arc::clone(&records),
            });
        records
    }

    /// Replace the records of a scope unless it moved past `seen`
    ///
    /// Returns whatever the entry holds afterwards: `records` when they
    /// landed, the newer entry when they were stale.
    pub fn replace_if_current(
        &self,
        scope: Scope,
        seen: u64,
        records: Vec<RemoteCommand>,
    ) -> Arc<[RemoteCommand]> {
        match self.entries.entry(scope) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                if entry.generation == seen {
                    entry.generation += 1;
                    entry.records = records.into();
                } else {
                    debug!(%scope, seen, current = entry.generation, "Dropping stale records");
                }
                Arc::clone(&entry.records)
            }
            Entry::Vacant(vacant) => {
                let records: Arc<[RemoteCommand]> = records.into();
                vacant.insert(CachedScope {
                    generation: seen + 1,
                    records: Arc::clone(&records),
                });
                records
            }
        }
    }

    /// Whether a scope was ever pushed or fetched
    pub fn contains(&self, scope: Scope) -> bool {
        self.entries.contains_key(&scope)
    }

    /// Scopes with a cached entry
    pub fn scopes(&self) -> Vec<Scope> {
        self.entries.iter().map(|entry| *entry.key()).collect()
    }
}
