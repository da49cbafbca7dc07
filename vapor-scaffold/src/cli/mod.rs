//! Command-line interface
//!
//! ```bash
//! vapor-scaffold Post title:String body:String
//! vapor-scaffold Post title:String --output ../my-app --strict
//! vapor-scaffold Post title:String --dry-run
//! ```

pub mod commands;

use crate::config::ScaffoldConfig;
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use commands::{ScaffoldCommand, ScaffoldOutcome};
use std::path::PathBuf;

/// Usage line printed when the entity or every field argument is missing
pub const USAGE: &str = "Usage: vapor-scaffold <name> <field:type> [<field:type>...]";

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "vapor-scaffold")]
#[command(version)]
#[command(about = "Generate a Vapor CRUD scaffold: model, controller, migration and Leaf views", long_about = None)]
pub struct Cli {
    /// Entity name (e.g., `Post`)
    pub entity: Option<String>,

    /// Field definitions (e.g., `title:String`, `views:Int`)
    #[arg(value_name = "FIELD:TYPE")]
    pub fields: Vec<String>,

    /// Project directory to write into (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail on field arguments that are not `name:Type`
    #[arg(long)]
    pub strict: bool,

    /// List the files that would be generated without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Merge flags over the loaded configuration
    #[must_use]
    pub fn apply_to(&self, mut config: ScaffoldConfig) -> ScaffoldConfig {
        if let Some(output) = &self.output {
            config.output.root.clone_from(output);
        }
        if self.strict {
            config.fields.strict = true;
        }
        config
    }
}

/// Outcome of a CLI invocation
#[derive(Debug)]
pub enum RunOutcome {
    /// Arguments were insufficient; usage was printed
    Usage,
    /// The scaffold command ran
    Scaffold(ScaffoldOutcome),
}

/// Run the CLI with already-loaded configuration
///
/// Fewer than two positional arguments print the usage line and succeed
/// without generating anything.
///
/// # Errors
///
/// Returns an error if field parsing fails in strict mode or a file cannot be
/// written.
pub fn run_with_config(cli: Cli, config: ScaffoldConfig) -> Result<RunOutcome> {
    let config = cli.apply_to(config);

    let Some(entity) = cli.entity else {
        println!("{USAGE}");
        return Ok(RunOutcome::Usage);
    };
    if cli.fields.is_empty() {
        println!("{USAGE}");
        return Ok(RunOutcome::Usage);
    }

    tracing::debug!(%entity, fields = cli.fields.len(), dry_run = cli.dry_run, "running scaffold");
    let cmd = ScaffoldCommand::new(entity, cli.fields, config, cli.dry_run);
    Ok(RunOutcome::Scaffold(cmd.execute()?))
}

/// Run the CLI, loading configuration from `./scaffold.toml` and the
/// environment
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the command fails.
pub fn run(cli: Cli) -> Result<RunOutcome> {
    let config = ScaffoldConfig::load().context("Failed to load configuration")?;
    run_with_config(cli, config)
}
