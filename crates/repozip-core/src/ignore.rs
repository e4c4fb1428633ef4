//! Gitignore-style pattern filtering.
//!
//! This is a best-effort approximation of gitignore semantics, kept
//! deliberately simple: no negation rules (`!pattern`), no anchoring, no
//! precedence between rules. Each pattern is tested as a single flat glob
//! against the whole relative path string (`*` may cross `/`), plus a
//! prefix/segment test for directory rules.

use globset::GlobBuilder;
use globset::GlobMatcher;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the version-control metadata directory, always excluded.
pub const GIT_DIR: &str = ".git";

/// Conventional name of the ignore-rule file.
pub const IGNORE_FILE: &str = ".gitignore";

/// A single parsed ignore pattern with its pre-compiled glob matcher.
#[derive(Debug, Clone)]
struct IgnoreRule {
    pattern: String,
    matcher: Option<GlobMatcher>,
}

impl IgnoreRule {
    fn new(pattern: String) -> Self {
        let matcher = compile_glob(&pattern);
        Self { pattern, matcher }
    }
}

/// The ignore-rule set for one run, built once from `.gitignore` lines.
///
/// # Examples
///
/// ```
/// use repozip_core::IgnoreRules;
///
/// let rules = IgnoreRules::parse("*.log\nbuild/\n# comment\n");
/// assert!(rules.is_ignored("debug.log"));
/// assert!(rules.is_ignored("build/out.o"));
/// assert!(!rules.is_ignored("src/main.rs"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    /// Parses ignore rules from the raw text of an ignore file.
    ///
    /// Per line: surrounding whitespace is stripped; empty lines and lines
    /// starting with `#` are skipped. A line ending in `/` is a directory
    /// rule and yields two patterns, the line with a recursive `**` suffix
    /// appended and the literal line itself.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut rules = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.ends_with('/') {
                rules.push(IgnoreRule::new(format!("{line}**")));
            }
            rules.push(IgnoreRule::new(line.to_string()));
        }
        Self { rules }
    }

    /// Loads ignore rules from `<root>/.gitignore`.
    ///
    /// A missing ignore file yields the empty rule set.
    ///
    /// # Errors
    ///
    /// Returns an error if the ignore file exists but cannot be read.
    pub fn load(root: &Path) -> io::Result<Self> {
        match fs::read_to_string(root.join(IGNORE_FILE)) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Decides whether a root-relative path is excluded.
    ///
    /// A path is excluded when:
    /// - it contains or begins with the `.git` metadata directory name
    ///   (true for every rule set, including the empty one),
    /// - any pattern glob-matches the whole path string, or
    /// - a directory rule (trailing `/`) is a prefix of the path or occurs
    ///   as a path segment anywhere inside it.
    #[must_use]
    pub fn is_ignored(&self, path: &str) -> bool {
        if path.contains(".git/") || path.starts_with(GIT_DIR) {
            return true;
        }

        for rule in &self.rules {
            if let Some(matcher) = &rule.matcher
                && matcher.is_match(path)
            {
                return true;
            }
            if rule.pattern.ends_with('/')
                && (path.starts_with(&rule.pattern)
                    || path.contains(&format!("/{}", rule.pattern)))
            {
                return true;
            }
        }

        false
    }

    /// Returns the parsed pattern strings, in order.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.pattern.as_str()).collect()
    }

    /// Returns the number of parsed patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns whether the rule set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Compiles a pattern into a flat glob matcher.
///
/// `literal_separator(false)` lets `*` cross directory boundaries, matching
/// the single flat test the rule set performs against whole path strings.
/// A pattern that is not a valid glob keeps only its string form and never
/// glob-matches.
fn compile_glob(pattern: &str) -> Option<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(false)
        .build()
        .ok()
        .map(|glob| glob.compile_matcher())
}
