//! vapor-scaffold CLI
//!
//! # Usage
//!
//! ```bash
//! vapor-scaffold Post title:String body:String
//! ```

use anyhow::Result;
use clap::Parser;
use vapor_scaffold::cli::{self, Cli};
use vapor_scaffold::observability;

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    cli::run(cli)?;
    Ok(())
}
