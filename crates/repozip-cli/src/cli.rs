//! CLI argument parsing using clap.

use clap::Parser;

/// Snapshot the current git project into `<project>_<timestamp>.zip`.
///
/// Run from the root of the repository. Tracked files are listed with
/// `git ls-files`; when git is unavailable the tree is scanned manually
/// with `.gitignore` filtering.
#[derive(Parser)]
#[command(name = "repozip")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Project name for the archive file (default: current directory name)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,

    /// List the files that would be archived without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output (per-file add/skip notices)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,
}
