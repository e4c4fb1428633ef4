//! Output formatter trait for CLI results.

use anyhow::Result;
use repozip_core::FileListing;
use repozip_core::ListingMode;
use repozip_core::SnapshotReport;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Format a progress notice (e.g. which archive is being created)
    fn format_notice(&self, message: &str) -> Result<()>;

    /// Format the manifest of a dry run
    fn format_manifest(&self, listing: &FileListing) -> Result<()>;

    /// Format the final snapshot result
    fn format_snapshot_result(
        &self,
        archive: &Path,
        mode: ListingMode,
        report: &SnapshotReport,
    ) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
            error: None,
        }
    }
}
