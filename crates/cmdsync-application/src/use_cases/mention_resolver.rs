//! Mention Resolver Use Case
//!
//! Turns a declared command into the `</name:id>` mention of its registered
//! counterpart. Lookups are scoped: a guild-scoped lookup searches the guild
//! first and then the global scope. The global scope is also searched when
//! no guild is given and `fallback_to_global` is enabled; with fallback
//! disabled, a guild-scoped lookup still considers global.
//!
//! Remote records come from the synchronizer's cache; a scope that was never
//! pushed or fetched is fetched once on first use.

use super::CommandStore;
use crate::domain_services::{CommandSyncInterface, MentionResolverInterface};
use async_trait::async_trait;
use cmdsync_domain::entities::DeclaredCommand;
use cmdsync_domain::error::Result;
use cmdsync_domain::value_objects::{CommandRef, GuildId, Mention, RemoteCommand, Scope};
use std::sync::Arc;
use tracing::debug;

/// Mention resolver implementation
pub struct MentionResolver {
    commands: Arc<CommandStore>,
    sync: Arc<dyn CommandSyncInterface>,
    fallback_to_global: bool,
}

impl MentionResolver {
    /// Create a resolver reading through `sync`'s cache
    pub fn new(
        commands: Arc<CommandStore>,
        sync: Arc<dyn CommandSyncInterface>,
        fallback_to_global: bool,
    ) -> Self {
        Self {
            commands,
            sync,
            fallback_to_global,
        }
    }

    /// Whether unscoped lookups fall back to the global scope
    pub fn fallback_to_global(&self) -> bool {
        self.fallback_to_global
    }

    fn checks_global(&self, guild: Option<GuildId>) -> bool {
        self.fallback_to_global || guild.is_some()
    }

    async fn find_record(&self, scope: Scope, name: &str) -> Result<Option<RemoteCommand>> {
        let records = self.sync.cached_or_fetch(scope).await?;
        Ok(records.iter().find(|record| record.name == name).cloned())
    }
}

#[async_trait]
impl MentionResolverInterface for MentionResolver {
    fn resolve_command(
        &self,
        reference: CommandRef<'_>,
        guild: Option<GuildId>,
    ) -> Option<DeclaredCommand> {
        match reference {
            CommandRef::Declared(command) => Some(command.clone()),
            CommandRef::Name(name) => self
                .commands
                .find(Scope::from(guild), name)
                .or_else(|| {
                    self.checks_global(guild)
                        .then(|| self.commands.find(Scope::Global, name))
                        .flatten()
                }),
        }
    }

    async fn find_mention_for(
        &self,
        reference: CommandRef<'_>,
        guild: Option<GuildId>,
    ) -> Result<Option<Mention>> {
        let Some(command) = self.resolve_command(reference, guild) else {
            return Ok(None);
        };
        let target = command.registry_name();

        let mut record = match guild {
            Some(guild) => self.find_record(Scope::Guild(guild), target).await?,
            None => None,
        };
        if record.is_none() && self.checks_global(guild) {
            record = self.find_record(Scope::Global, target).await?;
        }

        match record {
            Some(record) => Ok(Some(Mention::new(command.qualified_name(), record.id))),
            None => {
                debug!(
                    command = command.qualified_name(),
                    ?guild,
                    "No registered command to mention"
                );
                Ok(None)
            }
        }
    }
}
