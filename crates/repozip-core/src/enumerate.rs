//! File enumeration: git index listing with a manual-walk fallback.

use crate::ignore::IgnoreRules;
use std::path::Path;
use std::process::Command;
use walkdir::WalkDir;

/// How the file listing was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingMode {
    /// Authoritative `git ls-files` output (already ignore-aware).
    GitIndex,
    /// Recursive directory walk filtered through the ignore rules.
    ManualWalk,
}

impl ListingMode {
    /// Stable lowercase name for display and machine output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GitIndex => "git-index",
            Self::ManualWalk => "manual-walk",
        }
    }
}

/// The ordered candidate paths for one run.
#[derive(Debug, Clone)]
pub struct FileListing {
    /// Root-relative, forward-slash path strings, in enumeration order.
    pub paths: Vec<String>,
    /// How the listing was produced.
    pub mode: ListingMode,
    /// Why git enumeration was abandoned, when it was.
    pub diagnostic: Option<String>,
}

/// Produces the list of files to archive.
///
/// Prefers `git ls-files`, whose output already respects ignore rules and
/// excludes untracked files. When the git invocation fails (tool missing or
/// non-zero exit), the failure is recovered locally: a diagnostic is carried
/// on the listing and the walk-based fallback is used instead.
#[must_use]
pub fn enumerate_files(root: &Path, rules: &IgnoreRules) -> FileListing {
    match list_git_tracked(root) {
        Ok(paths) => FileListing {
            paths,
            mode: ListingMode::GitIndex,
            diagnostic: None,
        },
        Err(diagnostic) => FileListing {
            paths: walk_and_filter(root, rules),
            mode: ListingMode::ManualWalk,
            diagnostic: Some(diagnostic),
        },
    }
}

/// Lists tracked files via `git ls-files`.
///
/// `Err` carries a human-readable diagnostic for the fallback path.
fn list_git_tracked(root: &Path) -> std::result::Result<Vec<String>, String> {
    let output = Command::new("git")
        .arg("ls-files")
        .current_dir(root)
        .output()
        .map_err(|e| format!("could not run git ({e}); scanning the directory instead"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!(
            "git ls-files failed ({}); scanning the directory instead",
            stderr.trim()
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect())
}

/// Walks the root recursively, filtering through the ignore rules.
///
/// Ignored directories are pruned, so the walk never descends into them
/// (dependency caches and build trees are not scanned at all). Entries the
/// walker cannot read are skipped. The listing is sorted by file name per
/// directory, so repeated runs over an unchanged tree yield identical
/// sequences.
#[must_use]
pub fn walk_and_filter(root: &Path, rules: &IgnoreRules) -> Vec<String> {
    let mut paths = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !rules.is_ignored(&relative_path_string(root, entry.path())));

    for entry in walker {
        let Ok(entry) = entry else { continue };
        if entry.file_type().is_dir() {
            continue;
        }
        paths.push(relative_path_string(root, entry.path()));
    }

    paths
}

/// Converts an absolute path under `root` to a relative forward-slash string.
fn relative_path_string(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let text = relative.to_string_lossy();

    #[cfg(windows)]
    let text = text.replace('\\', "/");

    #[cfg(not(windows))]
    let text = text.into_owned();

    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, rel).unwrap();
    }

    #[test]
    fn test_walk_collects_relative_paths() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.txt");
        touch(temp.path(), "src/b.py");

        let paths = walk_and_filter(temp.path(), &IgnoreRules::default());
        assert_eq!(paths, vec!["a.txt".to_string(), "src/b.py".to_string()]);
    }

    #[test]
    fn test_walk_excludes_git_metadata() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "a.txt");
        touch(temp.path(), "src/b.py");
        touch(temp.path(), ".git/config");

        let paths = walk_and_filter(temp.path(), &IgnoreRules::default());
        assert_eq!(paths, vec!["a.txt".to_string(), "src/b.py".to_string()]);
    }

    #[test]
    fn test_walk_prunes_ignored_directories() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "keep.rs");
        touch(temp.path(), "build/out.o");
        touch(temp.path(), "build/deep/nested.o");

        let rules = IgnoreRules::parse("build/\n");
        let paths = walk_and_filter(temp.path(), &rules);

        assert_eq!(paths, vec!["keep.rs".to_string()]);
        assert!(paths.iter().all(|p| !p.starts_with("build/")));
    }

    #[test]
    fn test_walk_filters_ignored_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "main.rs");
        touch(temp.path(), "debug.log");
        touch(temp.path(), "sub/trace.log");

        let rules = IgnoreRules::parse("*.log\n");
        let paths = walk_and_filter(temp.path(), &rules);
        assert_eq!(paths, vec!["main.rs".to_string()]);
    }

    #[test]
    fn test_walk_is_idempotent() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "z.txt");
        touch(temp.path(), "a.txt");
        touch(temp.path(), "mid/file.txt");

        let rules = IgnoreRules::default();
        let first = walk_and_filter(temp.path(), &rules);
        let second = walk_and_filter(temp.path(), &rules);
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumerate_falls_back_outside_a_repository() {
        // `git ls-files` fails in a directory that is not a work tree (or
        // git may be missing entirely); either way manual mode takes over.
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "only.txt");

        let listing = enumerate_files(temp.path(), &IgnoreRules::default());
        assert_eq!(listing.mode, ListingMode::ManualWalk);
        assert!(listing.diagnostic.is_some());
        assert_eq!(listing.paths, vec!["only.txt".to_string()]);
    }

    #[test]
    fn test_listing_mode_names() {
        assert_eq!(ListingMode::GitIndex.as_str(), "git-index");
        assert_eq!(ListingMode::ManualWalk.as_str(), "manual-walk");
    }
}
