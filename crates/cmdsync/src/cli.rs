//! Command line interface
//!
//! Parses arguments with clap, loads configuration and the command manifest,
//! then runs one operation against the wired services. Operations return
//! their report as text; the binary prints it.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cmdsync_application::domain_services::{
    CommandSyncInterface, MentionResolverInterface, SyncOutcome,
};
use cmdsync_domain::value_objects::{CommandRef, GuildId, RemoteCommand, Scope};
use cmdsync_infrastructure::config::{AppConfig, ConfigLoader};
use cmdsync_infrastructure::logging::init_logging;
use cmdsync_infrastructure::{AppContext, init_app_from_config};

/// Command line interface for cmdsync
#[derive(Parser, Debug)]
#[command(name = "cmdsync")]
#[command(about = "Keep declared slash commands in sync with the command registry")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the command manifest, overriding `commands.manifest_path`
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push declared commands to the registry
    Sync {
        /// Push the global tree even when its digest is unchanged
        #[arg(long)]
        force: bool,

        /// Push the commands declared for this guild instead
        #[arg(long, conflicts_with = "force")]
        guild: Option<GuildId>,
    },

    /// Show the digest of the declared tree and the persisted one
    Digest,

    /// List the commands registered in a scope
    Fetch {
        /// Guild to list, global when omitted
        #[arg(long)]
        guild: Option<GuildId>,
    },

    /// Print the mention of a declared command
    Mention {
        /// Qualified command name, e.g. `queue clear`
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Guild the mention is rendered in
        #[arg(long)]
        guild: Option<GuildId>,
    },
}

/// Load configuration, initialize logging and run the requested operation
pub async fn run(cli: Cli) -> Result<String> {
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;

    let context = init_app_from_config(config)
        .await
        .context("Failed to initialize command sync services")?;
    execute(&context, &cli.command).await
}

/// Resolve configuration for a parsed command line
pub fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let mut config = loader.load().context("Failed to load configuration")?;

    if let Some(manifest) = &cli.manifest {
        config.commands.manifest_path = Some(manifest.clone());
    }
    // An explicit sync replaces the startup sync
    if matches!(cli.command, Command::Sync { .. }) {
        config.sync.sync_on_startup = false;
    }
    Ok(config)
}

/// Run one operation against wired services
pub async fn execute(context: &AppContext, command: &Command) -> Result<String> {
    let sync = context.synchronizer();
    match command {
        Command::Sync {
            guild: Some(guild), ..
        } => {
            let records = sync.sync_guild(*guild).await?;
            Ok(format!(
                "Registered {} command(s) in guild {guild}",
                records.len()
            ))
        }
        Command::Sync { force, guild: None } => {
            let outcome = if *force {
                sync.force_sync().await?
            } else {
                sync.sync_if_changed().await?
            };
            Ok(describe_outcome(&outcome))
        }
        Command::Digest => {
            let current = sync.current_digest().await?;
            let persisted = sync.persisted_digest().await?;
            let persisted = persisted.map_or_else(|| "none".to_string(), |d| d.to_hex());
            Ok(format!("current:   {current}\npersisted: {persisted}"))
        }
        Command::Fetch { guild } => {
            let scope = Scope::from(*guild);
            let records = sync.fetch(scope).await?;
            Ok(describe_records(scope, &records))
        }
        Command::Mention { name, guild } => {
            let name = name.join(" ");
            let mention = context
                .resolver()
                .find_mention_for(CommandRef::Name(&name), *guild)
                .await?;
            Ok(match mention {
                Some(mention) => mention.to_string(),
                None => format!("No registered command matches '{name}'"),
            })
        }
    }
}

fn describe_outcome(outcome: &SyncOutcome) -> String {
    match outcome {
        SyncOutcome::Unchanged { digest } => {
            format!("Command tree unchanged ({digest}), nothing to sync")
        }
        SyncOutcome::Synced {
            digest,
            previous,
            registered,
        } => {
            let previous = previous.map_or_else(|| "none".to_string(), |d| d.to_hex());
            format!("Synced {registered} command(s), digest {previous} -> {digest}")
        }
    }
}

fn describe_records(scope: Scope, records: &[RemoteCommand]) -> String {
    let mut out = format!("{} command(s) registered in {scope}", records.len());
    for record in records {
        let _ = write!(out, "\n  {:<20} {}", record.name, record.id);
    }
    out
}
