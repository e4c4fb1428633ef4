//! High-level snapshot API: repository guard and orchestration.

use crate::archive;
use crate::config::SnapshotConfig;
use crate::enumerate;
use crate::enumerate::ListingMode;
use crate::error::Result;
use crate::error::SnapshotError;
use crate::ignore::GIT_DIR;
use crate::ignore::IgnoreRules;
use crate::progress::ProgressCallback;
use crate::report::SnapshotReport;
use std::path::Path;
use std::path::PathBuf;

/// Result of a completed snapshot run.
#[derive(Debug, Clone)]
pub struct SnapshotOutcome {
    /// Where the archive was written.
    pub archive_path: PathBuf,
    /// How the manifest was produced.
    pub mode: ListingMode,
    /// Diagnostic from an abandoned git enumeration, if any.
    pub diagnostic: Option<String>,
    /// Statistics for the run.
    pub report: SnapshotReport,
}

/// Verifies that `root` is the root of a git repository.
///
/// # Errors
///
/// Returns [`SnapshotError::NotARepository`] when `root` has no `.git`
/// directory. No side effects beyond the check.
///
/// # Examples
///
/// ```no_run
/// use repozip_core::ensure_repository_root;
/// use std::path::Path;
///
/// ensure_repository_root(Path::new("."))?;
/// # Ok::<(), repozip_core::SnapshotError>(())
/// ```
pub fn ensure_repository_root(root: &Path) -> Result<()> {
    if root.join(GIT_DIR).is_dir() {
        Ok(())
    } else {
        Err(SnapshotError::NotARepository {
            path: root.to_path_buf(),
        })
    }
}

/// Project name used for the archive filename.
///
/// Taken from the configuration when set, otherwise derived from the root
/// directory's name.
#[must_use]
pub fn project_name(root: &Path, config: &SnapshotConfig) -> String {
    config.project_name.clone().unwrap_or_else(|| {
        root.file_name()
            .map_or_else(|| "snapshot".to_string(), |n| n.to_string_lossy().into_owned())
    })
}

/// Creates a timestamped snapshot archive of the repository at `root`.
///
/// Runs the whole pipeline: guard, ignore-rule loading, enumeration (git
/// index with manual-walk fallback), and archive writing. The archive is
/// written into `root` itself.
///
/// # Errors
///
/// Returns an error if `root` is not a repository root, the ignore file
/// exists but cannot be read, or the archive cannot be written. A failing
/// git invocation and individual vanished files are recovered internally
/// and reported through the outcome instead.
pub fn create_snapshot(
    root: &Path,
    config: &SnapshotConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<SnapshotOutcome> {
    ensure_repository_root(root)?;

    let rules = IgnoreRules::load(root)?;
    let listing = enumerate::enumerate_files(root, &rules);

    let name = archive::timestamped_archive_name(&project_name(root, config));
    let archive_path = root.join(&name);

    let report = archive::write_archive(&archive_path, root, &listing.paths, config, progress)?;

    Ok(SnapshotOutcome {
        archive_path,
        mode: listing.mode,
        diagnostic: listing.diagnostic,
        report,
    })
}
