//! File-extension watchlist
//!
//! Decides which documents get automatic tracking when they are opened. The
//! backing resource is a plain text file with one suffix per line; `#` lines
//! and blank lines are ignored.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Suffixes watched when no user configuration exists
pub const DEFAULT_PATTERNS: &[&str] = &[".clj", ".cljs", ".cljc"];

const DEFAULT_HEADER: &str = "# one file extension per line please :)";

#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No config directory available")]
    NoConfigDir,
}

/// Ordered set of suffix patterns. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    patterns: Vec<String>,
}

impl Default for Watchlist {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Watchlist {
    /// Build from explicit patterns, falling back to defaults when none are usable
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            if !pattern.is_empty() && !out.contains(&pattern) {
                out.push(pattern);
            }
        }

        if out.is_empty() {
            return Self::default();
        }
        Self { patterns: out }
    }

    /// Parse the line-oriented resource format
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// True iff `document_id` ends with one of the patterns (exact, case-sensitive)
    pub fn matches(&self, document_id: &str) -> bool {
        if document_id.is_empty() {
            return false;
        }
        self.patterns
            .iter()
            .any(|pattern| document_id.ends_with(pattern.as_str()))
    }

    /// Contents written when the resource does not exist yet
    pub fn default_file_contents() -> String {
        let mut text = String::from(DEFAULT_HEADER);
        for pattern in DEFAULT_PATTERNS {
            text.push('\n');
            text.push_str(pattern);
        }
        text.push('\n');
        text
    }

    /// Load the watchlist from `path`
    ///
    /// A missing file is replaced by the default resource (best effort). An
    /// existing file that cannot be read is left alone. Either way the defaults
    /// are returned. Never fails.
    pub fn load_or_create(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let watchlist = Self::parse(&text);
                tracing::info!(
                    "Loaded {} watchlist patterns from {}",
                    watchlist.patterns.len(),
                    path.display()
                );
                watchlist
            }
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Watchlist at {} not readable, using defaults: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
            Err(_) => {
                tracing::debug!("No watchlist at {}", path.display());
                if let Err(e) = Self::write_default(path) {
                    tracing::warn!(
                        "Failed to create default watchlist at {}: {}",
                        path.display(),
                        e
                    );
                }
                Self::default()
            }
        }
    }

    /// Write the default resource, creating parent directories
    pub fn write_default(path: &Path) -> Result<(), WatchlistError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::default_file_contents())?;
        tracing::info!("Created default watchlist at {}", path.display());
        Ok(())
    }

    /// Make sure the resource exists on disk without touching an existing one
    pub fn ensure_file(path: &Path) -> Result<(), WatchlistError> {
        if path.exists() {
            return Ok(());
        }
        Self::write_default(path)
    }

    /// Read an existing resource without creating anything
    pub fn read(path: &Path) -> Result<Self, WatchlistError> {
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    /// Where the resource lives: `explicit` if given, else the config directory
    pub fn locate(explicit: Option<PathBuf>) -> Result<PathBuf, WatchlistError> {
        explicit
            .or_else(crate::config_paths::watchlist_file)
            .ok_or(WatchlistError::NoConfigDir)
    }
}

/// Free-function form of [`Watchlist::matches`]
pub fn matches(document_id: &str, watchlist: &Watchlist) -> bool {
    watchlist.matches(document_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn clojure() -> Watchlist {
        Watchlist::new([".clj", ".cljs"])
    }

    #[test]
    fn test_matches_suffix() {
        assert!(matches("foo.clj", &clojure()));
        assert!(matches("/home/me/src/core.cljs", &clojure()));
    }

    #[test]
    fn test_rejects_other_suffixes() {
        assert!(!matches("foo.txt", &clojure()));
        assert!(!matches("foo.clj.bak", &clojure()));
    }

    #[test]
    fn test_empty_id_never_matches() {
        assert!(!matches("", &clojure()));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!matches("FOO.CLJ", &clojure()));
    }

    #[test]
    fn test_no_glob_semantics() {
        let list = Watchlist::new(["*.clj"]);
        assert!(!list.matches("foo.clj"));
        assert!(list.matches("weird*.clj"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let list = Watchlist::parse("# header\n\n  .edn  \n#.clj\n.bb\n");
        assert_eq!(list.patterns(), &[".edn".to_string(), ".bb".to_string()]);
    }

    #[test]
    fn test_parse_empty_falls_back_to_defaults() {
        assert_eq!(Watchlist::parse("# nothing here\n\n"), Watchlist::default());
    }

    #[test]
    fn test_parse_deduplicates_preserving_order() {
        let list = Watchlist::parse(".b\n.a\n.b\n");
        assert_eq!(list.patterns(), &[".b".to_string(), ".a".to_string()]);
    }

    #[test]
    fn test_default_file_contents_round_trips() {
        let parsed = Watchlist::parse(&Watchlist::default_file_contents());
        assert_eq!(parsed, Watchlist::default());
        assert!(Watchlist::default_file_contents().starts_with('#'));
    }

    #[test]
    fn test_load_or_create_creates_missing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("file-extensions.txt");

        let list = Watchlist::load_or_create(&path);

        assert_eq!(list, Watchlist::default());
        assert!(path.exists(), "Default watchlist should be written");
    }

    #[test]
    fn test_load_or_create_reads_existing_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("file-extensions.txt");
        std::fs::write(&path, ".fnl\n.janet\n").unwrap();

        let list = Watchlist::load_or_create(&path);
        assert!(list.matches("init.fnl"));
        assert!(!list.matches("core.clj"));
    }

    #[test]
    fn test_ensure_file_keeps_existing_contents() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("file-extensions.txt");
        std::fs::write(&path, ".scm\n").unwrap();

        Watchlist::ensure_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), ".scm\n");
    }

    #[test]
    fn test_load_unreadable_file_keeps_contents() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("file-extensions.txt");
        let bytes: &[u8] = b".fnl\n# caf\xE9\n.janet\n";
        std::fs::write(&path, bytes).unwrap();

        let watchlist = Watchlist::load_or_create(&path);
        assert_eq!(watchlist, Watchlist::default());
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }
}
