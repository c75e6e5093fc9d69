//! `slashsync sync [FILE] --app-id <ID> [--guild-id <ID>] [--dry-run]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use slashsync_core::Scope;
use slashsync_sync::{pipeline, SyncOutcome};

use crate::http::{HttpRegistry, DEFAULT_API_BASE};

use super::validate::load_valid_set;

/// Replace every registered command with the contents of a command file.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// YAML file with a top-level `commands:` list.
    #[arg(default_value = "commands.yml")]
    pub file: PathBuf,

    /// Application that owns the commands.
    #[arg(long, env = "DISCORD_APPLICATION_ID")]
    pub app_id: String,

    /// Register in this guild only; omit or leave empty for global commands.
    #[arg(long, env = "DISCORD_GUILD_ID", default_value = "")]
    pub guild_id: String,

    /// REST API root.
    #[arg(long, env = "DISCORD_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// List what would be deleted and created without changing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let set = load_valid_set(&self.file)?;
        let token = std::env::var("DISCORD_BOT_TOKEN")
            .context("DISCORD_BOT_TOKEN must be set to authenticate with the registry")?;

        let scope = Scope::guild(self.app_id, self.guild_id);
        let registry = HttpRegistry::new(self.api_base, token);
        let outcome = pipeline::run(&registry, &scope, &set, self.dry_run)
            .with_context(|| format!("sync failed for {scope}"))?;

        print_outcome(&outcome);
        Ok(())
    }
}

fn print_outcome(outcome: &SyncOutcome) {
    let prefix = if outcome.dry_run { "[dry-run] " } else { "" };

    for removed in &outcome.removed {
        println!("{prefix}  -  {} ({})", removed.name, removed.id);
    }
    if outcome.dry_run {
        for name in &outcome.planned {
            println!("{prefix}  +  {name}");
        }
    } else {
        for created in &outcome.created {
            println!("{prefix}  +  {} ({})", created.name, created.id);
        }
    }

    let added = if outcome.dry_run {
        outcome.planned.len()
    } else {
        outcome.created.len()
    };
    println!(
        "{prefix}{} {} synced ({} removed, {} created)",
        "✓".green(),
        outcome.scope,
        outcome.removed.len(),
        added
    );
}
