//! Command Translator Port

use crate::entities::CommandDefinition;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Produces the localized registry payload of a command
///
/// When a translator is configured its output replaces
/// [`CommandDefinition::to_payload`] both for pushes and for the digest, so a
/// change in translated text triggers a sync.
#[async_trait]
pub trait CommandTranslator: Send + Sync {
    /// Localized payload of a top-level command
    async fn translate(&self, command: &CommandDefinition) -> Result<Value>;

    /// Get the name/identifier of this translator implementation
    fn provider_name(&self) -> &str;
}
