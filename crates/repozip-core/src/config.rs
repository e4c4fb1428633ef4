//! Configuration for snapshot operations.

/// Configuration for creating a repository snapshot.
///
/// # Examples
///
/// ```
/// use repozip_core::SnapshotConfig;
///
/// // Defaults: project name from the directory, compression level 6
/// let config = SnapshotConfig::default();
///
/// let custom = SnapshotConfig::default()
///     .with_project_name(Some("backend".to_string()))
///     .with_compression_level(Some(9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SnapshotConfig {
    /// Project name used for the archive filename.
    ///
    /// `None` derives the name from the repository root's directory name.
    pub project_name: Option<String>,

    /// Deflate compression level (1-9).
    ///
    /// `None` uses the default level 6.
    pub compression_level: Option<u8>,
}

impl SnapshotConfig {
    /// Creates a new `SnapshotConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project name used for the archive filename.
    #[must_use]
    pub fn with_project_name(mut self, name: Option<String>) -> Self {
        self.project_name = name;
        self
    }

    /// Sets the deflate compression level (1-9).
    #[must_use]
    pub fn with_compression_level(mut self, level: Option<u8>) -> Self {
        self.compression_level = level;
        self
    }
}
