//! slashsync — validate application command files and publish them.
//!
//! # Usage
//!
//! ```text
//! slashsync validate [FILE] [--json] [--write <OUT>]
//! slashsync sync [FILE] --app-id <ID> [--guild-id <ID>] [--dry-run]
//! ```
//!
//! `sync` reads the bot token from `DISCORD_BOT_TOKEN`.

mod commands;
mod http;
mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{sync::SyncArgs, validate::ValidateArgs};

#[derive(Parser, Debug)]
#[command(
    name = "slashsync",
    version,
    about = "Validate application command definitions and sync them to the registry",
    long_about = None,
)]
struct Cli {
    /// Log per-command progress.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a command file against the platform's structural rules.
    Validate(ValidateArgs),

    /// Delete all registered commands, then create the ones in the file.
    Sync(SyncArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match cli.command {
        Commands::Validate(args) => args.run(),
        Commands::Sync(args) => args.run(),
    }
}
