//! Progress reporting for the archive write loop.
//!
//! Two [`ProgressCallback`] implementations: a progress bar for interactive
//! terminals and a line printer for verbose or piped runs.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use repozip_core::ProgressCallback;
use std::path::Path;

/// CLI progress bar wrapper implementing `ProgressCallback`.
///
/// Displays a per-file progress bar when running in a TTY. Automatically
/// cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    /// Creates a new CLI progress bar over `total` manifest entries.
    #[must_use]
    pub fn new(total: usize, message: &str) -> Self {
        let bar = ProgressBar::new(total as u64);

        // Template: "Archiving [████████░░░░] 42/100 files"
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} files")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );

        bar.set_message(message.to_string());

        Self { bar }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stdout().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_entry_skipped(&mut self, _path: &Path) {
        self.bar.inc(1);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Prints one line per manifest entry, like the add/skip notices of a
/// classic archiving tool. Used for verbose runs and non-TTY output.
pub struct VerbosePrinter {
    term: Term,
}

impl VerbosePrinter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for VerbosePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressCallback for VerbosePrinter {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, path: &Path) {
        let _ = self.term.write_line(&format!("Adding: {}", path.display()));
    }

    fn on_entry_skipped(&mut self, path: &Path) {
        let _ = self.term.write_line(&format!(
            "Skipping missing or non-regular file: {}",
            path.display()
        ));
    }

    fn on_complete(&mut self) {}
}
