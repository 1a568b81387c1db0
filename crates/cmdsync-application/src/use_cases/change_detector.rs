//! Change Detector
//!
//! Builds the canonical payload list of a command set and reduces it to a
//! [`CommandDigest`]. The payload list is the exact body the synchronizer
//! pushes, so equal digests mean the remote registry already holds that body.

use cmdsync_domain::constants::DIGEST_SEED;
use cmdsync_domain::entities::CommandDefinition;
use cmdsync_domain::error::Result;
use cmdsync_domain::ports::providers::CommandTranslator;
use cmdsync_domain::value_objects::CommandDigest;
use serde_json::{Map, Value};
use std::sync::Arc;
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Computes payloads and digests of declared command sets
#[derive(Clone, Default)]
pub struct ChangeDetector {
    translator: Option<Arc<dyn CommandTranslator>>,
}

impl ChangeDetector {
    /// Create a detector, optionally localizing payloads through a translator
    pub fn new(translator: Option<Arc<dyn CommandTranslator>>) -> Self {
        Self { translator }
    }

    /// Whether payloads go through a translator
    pub fn has_translator(&self) -> bool {
        self.translator.is_some()
    }

    /// Canonical payloads of `commands`, sorted by name
    ///
    /// Translation is awaited one command at a time, in sorted order.
    pub async fn payloads<'a, I>(&self, commands: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = &'a CommandDefinition>,
    {
        let mut sorted: Vec<&CommandDefinition> = commands.into_iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        let mut payloads = Vec::with_capacity(sorted.len());
        for command in sorted {
            let payload = match &self.translator {
                Some(translator) => translator.translate(command).await?,
                None => command.to_payload(),
            };
            payloads.push(payload);
        }
        Ok(payloads)
    }

    /// Digest of `commands`
    pub async fn compute_digest<'a, I>(&self, commands: I) -> Result<CommandDigest>
    where
        I: IntoIterator<Item = &'a CommandDefinition>,
    {
        let payloads = self.payloads(commands).await?;
        Self::digest_payloads(&payloads)
    }

    /// Digest of an already built payload list
    ///
    /// Object keys are serialized in lexicographic order and without
    /// whitespace, then hashed with XXH3-64 under [`DIGEST_SEED`].
    pub fn digest_payloads(payloads: &[Value]) -> Result<CommandDigest> {
        let canonical: Vec<Value> = payloads.iter().map(canonicalize).collect();
        let bytes = serde_json::to_vec(&canonical)?;
        Ok(CommandDigest::from_u64(xxh3_64_with_seed(&bytes, DIGEST_SEED)))
    }

    /// Whether `current` differs from the persisted digest
    pub fn has_changed(current: CommandDigest, persisted: Option<CommandDigest>) -> bool {
        persisted != Some(current)
    }
}

impl std::fmt::Debug for ChangeDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeDetector")
            .field(
                "translator",
                &self.translator.as_ref().map(|t| t.provider_name().to_string()),
            )
            .finish()
    }
}

/// Rebuild a JSON value with every object's keys in sorted order
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, value) in entries {
                sorted.insert(key.clone(), canonicalize(value));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
