//! Error types for snapshot operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`SnapshotError`].
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Errors that can occur while snapshotting a repository.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The working directory is not the root of a git repository.
    #[error("not a git repository (no .git directory in {path})")]
    NotARepository {
        /// The directory that was checked.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive writing failed.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl SnapshotError {
    /// Returns `true` if this error must abort the run before any archive
    /// is created.
    ///
    /// Only the repository guard produces fatal errors; everything the
    /// enumerator and writer recover from (a failing `git` invocation, a
    /// file vanishing between listing and writing) never surfaces as an
    /// error at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use repozip_core::SnapshotError;
    /// use std::path::PathBuf;
    ///
    /// let err = SnapshotError::NotARepository {
    ///     path: PathBuf::from("/tmp"),
    /// };
    /// assert!(err.is_guard_failure());
    /// ```
    #[must_use]
    pub const fn is_guard_failure(&self) -> bool {
        matches!(self, Self::NotARepository { .. })
    }
}
