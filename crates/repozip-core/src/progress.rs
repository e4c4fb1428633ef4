//! Progress callbacks for archive writing.

use std::path::Path;

/// Receives per-entry progress events during archive writing.
///
/// # Examples
///
/// ```
/// use repozip_core::ProgressCallback;
/// use std::path::Path;
///
/// struct LinePrinter;
///
/// impl ProgressCallback for LinePrinter {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("[{current}/{total}] {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, path: &Path) {
///         println!("Added: {}", path.display());
///     }
///
///     fn on_entry_skipped(&mut self, path: &Path) {
///         println!("Skipped: {}", path.display());
///     }
///
///     fn on_complete(&mut self) {}
/// }
/// ```
pub trait ProgressCallback {
    /// Called before processing each manifest entry.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of file data written into the archive.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after an entry was added to the archive.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called when an entry failed the write-time existence check.
    fn on_entry_skipped(&mut self, path: &Path);

    /// Called once when the whole archive is finished.
    fn on_complete(&mut self);
}

/// A progress callback that does nothing.
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_entry_skipped(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
