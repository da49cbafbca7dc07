//! CRUD scaffold command
//!
//! Generates a model, controller, migration and Leaf views for one entity.
//!
//! # Example
//!
//! ```bash
//! vapor-scaffold Post title:String body:String
//! ```

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::scaffold::{EntityName, FieldSet, GeneratedFile, ScaffoldGenerator};
use crate::sink::{FileSink, FsSink};
use anyhow::{Context, Result};
use console::style;

/// CRUD scaffold command
pub struct ScaffoldCommand {
    /// Entity name (e.g., `Post`)
    entity: String,
    /// Field definitions (e.g., `title:String`)
    fields: Vec<String>,
    /// Resolved configuration
    config: ScaffoldConfig,
    /// List the files instead of writing them
    dry_run: bool,
}

/// What a scaffold run did
#[derive(Debug)]
pub enum ScaffoldOutcome {
    /// Files were written
    Written(Vec<GeneratedFile>),
    /// Files were composed but not written
    Planned(Vec<GeneratedFile>),
    /// The entity name was rejected; nothing was generated
    Rejected(String),
}

impl ScaffoldCommand {
    /// Create a new `ScaffoldCommand`
    #[must_use]
    pub const fn new(
        entity: String,
        fields: Vec<String>,
        config: ScaffoldConfig,
        dry_run: bool,
    ) -> Self {
        Self {
            entity,
            fields,
            config,
            dry_run,
        }
    }

    /// Execute the scaffold command
    ///
    /// An empty entity name is reported and ends the run without error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A field argument is malformed in strict mode
    /// - A directory or file cannot be written
    pub fn execute(&self) -> Result<ScaffoldOutcome> {
        let entity = match EntityName::new(self.entity.as_str()) {
            Ok(entity) => entity,
            Err(ScaffoldError::InvalidInput(message)) => {
                println!("{} {message}", style("Error:").red().bold());
                return Ok(ScaffoldOutcome::Rejected(message));
            }
            Err(err) => return Err(err.into()),
        };

        let fields = FieldSet::parse(&self.fields, self.config.fields.parse_mode())
            .context("Failed to parse field definitions")?;

        println!(
            "\n{} {} {}",
            style("Scaffolding CRUD for").cyan().bold(),
            style(&entity).green().bold(),
            style("...").cyan().bold()
        );

        let generator =
            ScaffoldGenerator::from_parts(entity, fields).with_layout(self.config.output.layout());
        let files = generator.generate();

        if self.dry_run {
            println!(
                "\n{} {} files (dry run, nothing written):",
                style("Would generate").yellow().bold(),
                files.len()
            );
            for file in &files {
                Self::print_file(file);
            }
            return Ok(ScaffoldOutcome::Planned(files));
        }

        let sink = FsSink::new(&self.config.output.root);
        sink.write_all(&files).with_context(|| {
            format!("Failed to write scaffold for {}", generator.entity())
        })?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );
        for file in &files {
            Self::print_file(file);
        }

        Self::print_next_steps(generator.entity());
        Ok(ScaffoldOutcome::Written(files))
    }

    fn print_file(file: &GeneratedFile) {
        println!(
            "  {} {} ({})",
            style("✓").green(),
            style(file.path.display()).dim(),
            style(&file.description).dim()
        );
    }

    fn print_next_steps(entity: &EntityName) {
        println!(
            "\n{} CRUD scaffold for {} is ready!",
            style("✨").green().bold(),
            style(entity).green().bold()
        );

        println!("\n{}", style("Next steps:").cyan().bold());
        println!("  1. Register the migration in configure.swift:");
        println!(
            "     {}",
            style(format!("app.migrations.add(Create{entity}())")).yellow()
        );
        println!("  2. Register the controller in routes.swift:");
        println!(
            "     {}",
            style(format!("try app.register(collection: {entity}Controller())")).yellow()
        );
        println!("  3. Run the migration: {}", style("swift run App migrate").yellow());
    }
}
