//! Snapshot a git working tree into a timestamped ZIP archive.
//!
//! `repozip-core` enumerates the files of a version-controlled project,
//! preferring `git ls-files` (which is inherently ignore-aware) and falling
//! back to a gitignore-filtered directory walk, then writes them into a
//! deflate-compressed ZIP named after the project and the current time.
//!
//! # Examples
//!
//! ```no_run
//! use repozip_core::NoopProgress;
//! use repozip_core::SnapshotConfig;
//! use repozip_core::create_snapshot;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SnapshotConfig::default();
//! let outcome = create_snapshot(Path::new("."), &config, &mut NoopProgress)?;
//! println!(
//!     "wrote {} ({} files)",
//!     outcome.archive_path.display(),
//!     outcome.report.files_attempted()
//! );
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod ignore;
pub mod progress;
pub mod report;

// Re-export main API types
pub use api::SnapshotOutcome;
pub use api::create_snapshot;
pub use api::ensure_repository_root;
pub use config::SnapshotConfig;
pub use enumerate::FileListing;
pub use enumerate::ListingMode;
pub use error::Result;
pub use error::SnapshotError;
pub use ignore::IgnoreRules;
pub use progress::NoopProgress;
pub use progress::ProgressCallback;
pub use report::SnapshotReport;
