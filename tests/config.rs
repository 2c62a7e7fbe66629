//! Configuration system tests
//!
//! Tests for config paths, settings parsing, and the watchlist resource.

use std::path::PathBuf;

use parsync::config::{Settings, DEFAULT_QUIESCENCE_MS};
use parsync::config_paths;
use parsync::watchlist::{Watchlist, DEFAULT_PATTERNS};
use tempfile::tempdir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("parsync"));
    }
}

#[test]
fn test_watchlist_file_lives_in_config_dir() {
    if let (Some(dir), Some(file)) = (config_paths::config_dir(), config_paths::watchlist_file()) {
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert_eq!(file.file_name().unwrap(), "file-extensions.txt");
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(file) = config_paths::config_file() {
        assert_eq!(file.extension().unwrap(), "yaml");
    }
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    if let (Some(dir), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&dir));
    }
}

// ========================================================================
// Settings Tests
// ========================================================================

#[test]
fn test_settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.quiescence_ms, DEFAULT_QUIESCENCE_MS);
    assert!(settings.normalize_on_open);
    assert!(settings.watchlist_path.is_none());
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let settings = Settings::from_yaml("quiescence_ms: 40\n").unwrap();
    assert_eq!(settings.quiescence_ms, 40);
    assert!(settings.normalize_on_open);
}

#[test]
fn test_watchlist_override_wins() {
    let settings =
        Settings::from_yaml("normalize_on_open: false\nwatchlist_path: /srv/exts.txt\n").unwrap();
    assert!(!settings.normalize_on_open);
    assert_eq!(
        settings.watchlist_file(),
        Some(PathBuf::from("/srv/exts.txt"))
    );
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(Settings::from_yaml("quiescence_ms: soon\n").is_err());
}

// ========================================================================
// Watchlist Resource Tests
// ========================================================================

#[test]
fn test_missing_resource_is_created_with_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("file-extensions.txt");

    let watchlist = Watchlist::load_or_create(&path);

    assert_eq!(watchlist.patterns().len(), DEFAULT_PATTERNS.len());
    let written = std::fs::read_to_string(&path).unwrap();
    for pattern in DEFAULT_PATTERNS {
        assert!(written.lines().any(|line| line == *pattern));
    }
}

#[test]
fn test_resource_with_only_comments_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("file-extensions.txt");
    std::fs::write(&path, "# nothing\n\n   \n").unwrap();

    assert_eq!(Watchlist::load_or_create(&path), Watchlist::default());
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "# nothing\n\n   \n",
        "An existing resource is never rewritten"
    );
}

#[test]
fn test_read_does_not_create() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("file-extensions.txt");

    assert!(Watchlist::read(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_locate_prefers_explicit_path() {
    let explicit = PathBuf::from("/tmp/custom.txt");
    assert_eq!(Watchlist::locate(Some(explicit.clone())).unwrap(), explicit);
}

#[test]
fn test_reload_is_wholesale() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("file-extensions.txt");
    std::fs::write(&path, ".clj\n.edn\n").unwrap();
    let before = Watchlist::load_or_create(&path);

    std::fs::write(&path, ".fnl\n").unwrap();
    let after = Watchlist::load_or_create(&path);

    assert!(before.matches("deps.edn"));
    assert!(!after.matches("deps.edn"));
    assert_eq!(after.patterns(), &[".fnl".to_string()]);
}
