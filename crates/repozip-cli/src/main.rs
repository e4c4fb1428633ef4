//! Repozip CLI - snapshot a git working tree into a timestamped ZIP archive.

mod cli;
mod error;
mod output;
mod progress;
mod snapshot;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    snapshot::execute(&cli, &*formatter)
}
