//! Error conversion utilities for CLI.
//!
//! Converts repozip-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use repozip_core::SnapshotError;
use std::path::Path;

/// Converts `SnapshotError` to user-friendly anyhow error with context
pub fn convert_snapshot_error(err: SnapshotError, root: &Path) -> anyhow::Error {
    match err {
        SnapshotError::NotARepository { path } => {
            anyhow!(
                "Not a git repository: {}\n\
                 HINT: Run repozip from the root of your project (the directory containing .git).",
                path.display()
            )
        }
        SnapshotError::Io(io_err) => {
            anyhow!(
                "I/O error while archiving '{}': {}",
                root.display(),
                io_err
            )
        }
        SnapshotError::Zip(zip_err) => {
            anyhow!(
                "Failed to write archive in '{}': {}",
                root.display(),
                zip_err
            )
        }
    }
}
