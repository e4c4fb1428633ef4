//! Snapshot command implementation.

use crate::cli::Cli;
use crate::error::convert_snapshot_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use crate::progress::VerbosePrinter;
use anyhow::Context;
use anyhow::Result;
use repozip_core::IgnoreRules;
use repozip_core::NoopProgress;
use repozip_core::SnapshotConfig;
use repozip_core::SnapshotReport;
use repozip_core::archive::timestamped_archive_name;
use repozip_core::archive::write_archive;
use repozip_core::api::ensure_repository_root;
use repozip_core::api::project_name;
use repozip_core::enumerate::FileListing;
use repozip_core::enumerate::enumerate_files;
use std::env;
use std::path::Path;

pub fn execute(args: &Cli, formatter: &dyn OutputFormatter) -> Result<()> {
    let root = env::current_dir().context("failed to get current directory")?;

    ensure_repository_root(&root).map_err(|e| convert_snapshot_error(e, &root))?;

    let config = SnapshotConfig::default()
        .with_project_name(args.name.clone())
        .with_compression_level(args.compression_level);

    let rules = IgnoreRules::load(&root).context("failed to read .gitignore")?;
    let listing = enumerate_files(&root, &rules);

    if let Some(diagnostic) = &listing.diagnostic {
        formatter.format_warning(diagnostic);
    }

    if args.dry_run {
        return formatter.format_manifest(&listing);
    }

    let archive_name = timestamped_archive_name(&project_name(&root, &config));
    formatter.format_notice(&format!("Creating archive '{archive_name}'..."))?;

    let archive_path = root.join(&archive_name);
    let report = write_with_progress(args, &root, &archive_path, &listing, &config)
        .map_err(|e| convert_snapshot_error(e, &root))?;

    formatter.format_snapshot_result(Path::new(&archive_name), listing.mode, &report)?;

    Ok(())
}

/// Runs the write loop with the progress reporting appropriate for the
/// output mode: nothing for quiet/JSON runs, per-file lines for verbose or
/// piped runs, a progress bar on an interactive terminal.
fn write_with_progress(
    args: &Cli,
    root: &Path,
    archive_path: &Path,
    listing: &FileListing,
    config: &SnapshotConfig,
) -> repozip_core::Result<SnapshotReport> {
    if args.quiet || args.json {
        write_archive(archive_path, root, &listing.paths, config, &mut NoopProgress)
    } else if args.verbose || !CliProgress::should_show() {
        let mut printer = VerbosePrinter::new();
        write_archive(archive_path, root, &listing.paths, config, &mut printer)
    } else {
        let mut bar = CliProgress::new(listing.paths.len(), "Archiving");
        write_archive(archive_path, root, &listing.paths, config, &mut bar)
    }
}
