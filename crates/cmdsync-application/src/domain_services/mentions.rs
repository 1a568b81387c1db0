//! Mention resolution service interface

use async_trait::async_trait;
use cmdsync_domain::entities::DeclaredCommand;
use cmdsync_domain::error::Result;
use cmdsync_domain::value_objects::{CommandRef, GuildId, Mention};

/// Resolves declared commands to mentions of their registered counterparts
#[async_trait]
pub trait MentionResolverInterface: Send + Sync {
    /// Resolve a reference to a declared command, searching `guild` first
    fn resolve_command(
        &self,
        reference: CommandRef<'_>,
        guild: Option<GuildId>,
    ) -> Option<DeclaredCommand>;

    /// Mention of a command, or `None` when it is not registered remotely
    ///
    /// May fetch a cold scope from the registry; never pushes.
    async fn find_mention_for(
        &self,
        reference: CommandRef<'_>,
        guild: Option<GuildId>,
    ) -> Result<Option<Mention>>;
}
