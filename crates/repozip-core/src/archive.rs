//! ZIP archive writing.
//!
//! The writer consumes the manifest produced by the enumerator. Each entry
//! is re-checked immediately before writing; entries that vanished or turned
//! out not to be regular files are skipped with a notice and never abort the
//! run. The archive handle is released on every path: `finish()` on success,
//! drop of the underlying file on error.

use crate::config::SnapshotConfig;
use crate::error::Result;
use crate::progress::ProgressCallback;
use crate::report::SnapshotReport;
use chrono::DateTime;
use chrono::Local;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Default deflate compression level.
const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Formats the archive filename for a project and timestamp.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use repozip_core::archive::archive_file_name;
///
/// let ts = chrono::Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap();
/// assert_eq!(archive_file_name("backend", ts), "backend_20240309_143005.zip");
/// ```
#[must_use]
pub fn archive_file_name(project: &str, timestamp: DateTime<Local>) -> String {
    format!("{}_{}.zip", project, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Formats the archive filename for a project, stamped with the current
/// local time (one-second resolution).
#[must_use]
pub fn timestamped_archive_name(project: &str) -> String {
    archive_file_name(project, Local::now())
}

/// Writes the manifest into a deflate-compressed ZIP archive at `output`.
///
/// Any existing file at `output` is overwritten, never appended to. Entry
/// names are the manifest's relative path strings; relative directory
/// structure is preserved.
///
/// # Errors
///
/// Returns an error if the output file cannot be created, a listed file
/// that passed the write-time check cannot be read, or the ZIP stream
/// fails. A manifest entry that fails the write-time existence check is
/// not an error; it is recorded on the report and skipped.
pub fn write_archive<P: AsRef<Path>>(
    output: P,
    root: &Path,
    manifest: &[String],
    config: &SnapshotConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<SnapshotReport> {
    let file = File::create(output.as_ref())?;
    let mut report = write_archive_internal(file, root, manifest, config, progress)?;
    report.archive_bytes = std::fs::metadata(output.as_ref())?.len();
    Ok(report)
}

/// Internal writer generic over the output stream.
fn write_archive_internal<W: Write + Seek>(
    writer: W,
    root: &Path,
    manifest: &[String],
    config: &SnapshotConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<SnapshotReport> {
    let mut zip = ZipWriter::new(writer);
    let mut report = SnapshotReport::default();
    let start = std::time::Instant::now();

    let level = config
        .compression_level
        .unwrap_or(DEFAULT_COMPRESSION_LEVEL);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(i64::from(level)));

    let total = manifest.len();

    // Reusable buffer for file copying
    let mut buffer = vec![0u8; 64 * 1024]; // 64 KiB

    for (idx, entry_name) in manifest.iter().enumerate() {
        let entry_path = Path::new(entry_name);
        progress.on_entry_start(entry_path, total, idx + 1);

        // Write-time check: the file may have vanished (or be a directory)
        // since enumeration. Skips never fail the run.
        let source = root.join(entry_name);
        if !source.is_file() {
            report.files_skipped += 1;
            report.add_warning(format!("Skipped missing or non-regular file: {entry_name}"));
            progress.on_entry_skipped(entry_path);
            continue;
        }

        add_file_to_zip(
            &mut zip,
            &source,
            entry_name,
            &options,
            &mut report,
            progress,
            &mut buffer,
        )?;
        progress.on_entry_complete(entry_path);
    }

    zip.finish()?;

    report.duration = start.elapsed();
    progress.on_complete();

    Ok(report)
}

/// Streams a single file into the archive under its relative path.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    source: &Path,
    entry_name: &str,
    options: &SimpleFileOptions,
    report: &mut SnapshotReport,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<()> {
    let mut file = File::open(source)?;

    zip.start_file(entry_name, *options)?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    report.files_added += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::progress::NoopProgress;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn manifest(entries: &[&str]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    fn entry_names(archive: &Path) -> Vec<String> {
        let file = File::open(archive).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();
        (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_archive_file_name_format() {
        let ts = Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap();
        assert_eq!(
            archive_file_name("backend", ts),
            "backend_20240309_143005.zip"
        );
    }

    #[test]
    fn test_timestamped_archive_name_shape() {
        let name = timestamped_archive_name("proj");
        assert!(name.starts_with("proj_"));
        assert!(name.ends_with(".zip"));
        // proj_YYYYMMDD_HHMMSS.zip
        assert_eq!(name.len(), "proj_".len() + 15 + ".zip".len());
    }

    #[test]
    fn test_write_archive_basic() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/b.py"), "print('b')").unwrap();

        let output = temp.path().join("out.zip");
        let report = write_archive(
            &output,
            temp.path(),
            &manifest(&["a.txt", "src/b.py"]),
            &SnapshotConfig::default(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(report.files_added, 2);
        assert_eq!(report.files_skipped, 0);
        assert!(report.bytes_written > 0);
        assert!(report.archive_bytes > 0);
        assert_eq!(entry_names(&output), vec!["a.txt", "src/b.py"]);
    }

    #[test]
    fn test_write_archive_skips_missing_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();

        let output = temp.path().join("out.zip");
        let report = write_archive(
            &output,
            temp.path(),
            &manifest(&["a.txt", "ghost.txt"]),
            &SnapshotConfig::default(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.files_skipped, 1);
        assert_eq!(report.files_attempted(), 2);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("ghost.txt"));
        assert_eq!(entry_names(&output), vec!["a.txt"]);
    }

    #[test]
    fn test_write_archive_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dir")).unwrap();
        fs::write(temp.path().join("f.txt"), "f").unwrap();

        let output = temp.path().join("out.zip");
        let report = write_archive(
            &output,
            temp.path(),
            &manifest(&["dir", "f.txt"]),
            &SnapshotConfig::default(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(report.files_added, 1);
        assert_eq!(report.files_skipped, 1);
        assert_eq!(entry_names(&output), vec!["f.txt"]);
    }

    #[test]
    fn test_write_archive_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();
        fs::write(temp.path().join("b.txt"), "beta").unwrap();

        let output = temp.path().join("out.zip");
        write_archive(
            &output,
            temp.path(),
            &manifest(&["a.txt", "b.txt"]),
            &SnapshotConfig::default(),
            &mut NoopProgress,
        )
        .unwrap();

        // Second run with a smaller manifest replaces the archive.
        write_archive(
            &output,
            temp.path(),
            &manifest(&["a.txt"]),
            &SnapshotConfig::default(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(entry_names(&output), vec!["a.txt"]);
    }

    #[test]
    fn test_write_archive_uses_deflate() {
        let temp = TempDir::new().unwrap();
        // Repetitive content compresses well under deflate.
        fs::write(temp.path().join("big.txt"), "a".repeat(10_000)).unwrap();

        let output = temp.path().join("out.zip");
        let report = write_archive(
            &output,
            temp.path(),
            &manifest(&["big.txt"]),
            &SnapshotConfig::default().with_compression_level(Some(9)),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(report.files_added, 1);
        assert!(report.archive_bytes < report.bytes_written);

        // ZIP local file header magic.
        let data = fs::read(&output).unwrap();
        assert_eq!(&data[0..4], b"PK\x03\x04");
    }

    #[test]
    fn test_write_archive_roundtrip() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file1.txt"), "content1").unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();
        fs::write(temp.path().join("subdir/file2.txt"), "content2").unwrap();

        let output = temp.path().join("out.zip");
        write_archive(
            &output,
            temp.path(),
            &manifest(&["file1.txt", "subdir/file2.txt"]),
            &SnapshotConfig::default(),
            &mut NoopProgress,
        )
        .unwrap();

        let file = File::open(&output).unwrap();
        let mut zip = zip::ZipArchive::new(file).unwrap();

        let mut first = String::new();
        zip.by_name("file1.txt")
            .unwrap()
            .read_to_string(&mut first)
            .unwrap();
        assert_eq!(first, "content1");

        let mut second = String::new();
        zip.by_name("subdir/file2.txt")
            .unwrap()
            .read_to_string(&mut second)
            .unwrap();
        assert_eq!(second, "content2");
    }

    #[test]
    fn test_write_archive_progress_callbacks() {
        #[derive(Default)]
        struct TestProgress {
            started: Vec<String>,
            completed: Vec<String>,
            skipped: Vec<String>,
            bytes: u64,
            finished: bool,
        }

        impl ProgressCallback for TestProgress {
            fn on_entry_start(&mut self, path: &Path, _total: usize, _current: usize) {
                self.started.push(path.to_string_lossy().to_string());
            }

            fn on_bytes_written(&mut self, bytes: u64) {
                self.bytes += bytes;
            }

            fn on_entry_complete(&mut self, path: &Path) {
                self.completed.push(path.to_string_lossy().to_string());
            }

            fn on_entry_skipped(&mut self, path: &Path) {
                self.skipped.push(path.to_string_lossy().to_string());
            }

            fn on_complete(&mut self) {
                self.finished = true;
            }
        }

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();

        let mut progress = TestProgress::default();
        let output = temp.path().join("out.zip");
        write_archive(
            &output,
            temp.path(),
            &manifest(&["a.txt", "ghost.txt"]),
            &SnapshotConfig::default(),
            &mut progress,
        )
        .unwrap();

        assert_eq!(progress.started, vec!["a.txt", "ghost.txt"]);
        assert_eq!(progress.completed, vec!["a.txt"]);
        assert_eq!(progress.skipped, vec!["ghost.txt"]);
        assert_eq!(progress.bytes, 5);
        assert!(progress.finished);
    }

    #[test]
    fn test_write_archive_empty_manifest() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("empty.zip");

        let report = write_archive(
            &output,
            temp.path(),
            &[],
            &SnapshotConfig::default(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(report.files_attempted(), 0);
        assert!(output.exists());
    }
}
