//! `slashsync validate [FILE] [--json] [--write <OUT>]`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use slashsync_core::{loader, validate, CommandSet};

/// Check a command file without contacting the registry.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// YAML file with a top-level `commands:` list.
    #[arg(default_value = "commands.yml")]
    pub file: PathBuf,

    /// Print the decoded command set as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Also write the validated set, normalized to wire form, to this YAML file.
    #[arg(long, value_name = "OUT")]
    pub write: Option<PathBuf>,
}

#[derive(Tabled)]
struct CommandRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Options")]
    options: usize,
    #[tabled(rename = "Description")]
    description: String,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let set = load_valid_set(&self.file)?;

        if let Some(out) = &self.write {
            loader::save_command_set(out, &set)
                .with_context(|| format!("cannot write '{}'", out.display()))?;
            tracing::info!("wrote normalized command file {}", out.display());
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&set)?);
            return Ok(());
        }

        let rows: Vec<CommandRow> = set
            .iter()
            .map(|c| CommandRow {
                name: c.name.clone(),
                category: c.category.to_string(),
                options: c.options.len(),
                description: c.description.clone(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!(
            "{} {} command(s) valid in {}",
            "✓".green(),
            set.len(),
            self.file.display()
        );
        Ok(())
    }
}

/// Load `file` and reject it unless it passes validation.
pub fn load_valid_set(file: &Path) -> Result<CommandSet> {
    let set = loader::load_command_set(file)
        .with_context(|| format!("cannot load '{}'", file.display()))?;
    validate(&set).with_context(|| format!("'{}' is not a valid command set", file.display()))?;
    tracing::debug!("{} validated ({} commands)", file.display(), set.len());
    Ok(set)
}
