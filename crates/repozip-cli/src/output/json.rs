//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use repozip_core::FileListing;
use repozip_core::ListingMode;
use repozip_core::SnapshotReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_notice(&self, _message: &str) -> Result<()> {
        // Notices would interleave with the result document; the final
        // envelope carries everything machine consumers need.
        Ok(())
    }

    fn format_manifest(&self, listing: &FileListing) -> Result<()> {
        #[derive(Serialize)]
        struct ManifestOutput {
            mode: &'static str,
            total_files: usize,
            files: Vec<String>,
        }

        let data = ManifestOutput {
            mode: listing.mode.as_str(),
            total_files: listing.paths.len(),
            files: listing.paths.clone(),
        };

        let output = JsonOutput::success("manifest", data);
        Self::output(&output)
    }

    fn format_snapshot_result(
        &self,
        archive: &Path,
        mode: ListingMode,
        report: &SnapshotReport,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct SnapshotOutput {
            archive: String,
            mode: &'static str,
            files_included: usize,
            files_skipped: usize,
            total_files: usize,
            bytes_written: u64,
            archive_bytes: u64,
            size_mib: f64,
            duration_ms: u128,
            warnings: Vec<String>,
        }

        let data = SnapshotOutput {
            archive: archive.display().to_string(),
            mode: mode.as_str(),
            files_included: report.files_added,
            files_skipped: report.files_skipped,
            total_files: report.files_attempted(),
            bytes_written: report.bytes_written,
            archive_bytes: report.archive_bytes,
            size_mib: report.archive_size_mib(),
            duration_ms: report.duration.as_millis(),
            warnings: report.warnings.clone(),
        };

        let output = JsonOutput::success("snapshot", data);
        Self::output(&output)
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}
