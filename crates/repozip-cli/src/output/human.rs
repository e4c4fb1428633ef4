//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use repozip_core::FileListing;
use repozip_core::ListingMode;
use repozip_core::SnapshotReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn format_number(n: usize) -> String {
        let s = n.to_string();
        let mut result = String::new();
        let mut count = 0;

        for c in s.chars().rev() {
            if count == 3 {
                result.push(',');
                count = 0;
            }
            result.push(c);
            count += 1;
        }

        result.chars().rev().collect()
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_notice(&self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        let _ = self.term.write_line(message);
        Ok(())
    }

    fn format_manifest(&self, listing: &FileListing) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        for path in &listing.paths {
            let _ = self.term.write_line(path);
        }
        let _ = self.term.write_line(&format!(
            "Total files: {} ({})",
            Self::format_number(listing.paths.len()),
            listing.mode.as_str()
        ));

        Ok(())
    }

    fn format_snapshot_result(
        &self,
        archive: &Path,
        mode: ListingMode,
        report: &SnapshotReport,
    ) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive created: {}",
                style("✓").green().bold(),
                archive.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Archive created: {}", archive.display()));
        }

        let _ = self.term.write_line(&format!(
            "  Total files:   {}",
            Self::format_number(report.files_attempted())
        ));
        let _ = self.term.write_line(&format!(
            "  Size:          {:.2} MiB",
            report.archive_size_mib()
        ));

        if report.files_skipped > 0 {
            let _ = self.term.write_line(&format!(
                "  Files skipped: {}",
                Self::format_number(report.files_skipped)
            ));
        }

        if self.verbose {
            let _ = self.term.write_line(&format!(
                "  Uncompressed:  {}",
                Self::format_size(report.bytes_written)
            ));
            let _ = self.term.write_line(&format!(
                "  Compression:   {:.1}:1",
                report.compression_ratio()
            ));
            let _ = self
                .term
                .write_line(&format!("  Listing mode:  {}", mode.as_str()));
            let _ = self
                .term
                .write_line(&format!("  Duration:      {:?}", report.duration));
        }

        if report.has_warnings() {
            let _ = self.term.write_line("");
            if self.use_colors {
                let _ = self
                    .term
                    .write_line(&format!("{}", style("Warnings:").yellow().bold()));
            } else {
                let _ = self.term.write_line("Warnings:");
            }
            for warning in &report.warnings {
                let _ = self.term.write_line(&format!("  - {warning}"));
            }
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("WARNING:").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
