//! File system watching for the watchlist resource
//!
//! Uses the `notify` crate with debouncing to detect edits made to the
//! watchlist file outside the host editor, so the pattern set can be reloaded
//! without a restart.

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Watches the directory holding the watchlist and reports changes to the file
pub struct WatchlistWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    /// Receiver for debounced events
    rx: Receiver<Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>>,
    /// The watchlist file
    path: PathBuf,
}

impl WatchlistWatcher {
    /// Start watching `path`
    ///
    /// The parent directory is watched non-recursively so that editors which
    /// save by rename are still picked up. Events are debounced by 200ms.
    pub fn new(path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut debouncer = new_debouncer(Duration::from_millis(200), tx)?;

        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        debouncer
            .watcher()
            .watch(&dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching watchlist at {}", path.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            path,
        })
    }

    /// Get the watchlist path being watched
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Poll for pending changes to the watchlist file (non-blocking)
    ///
    /// Drains all queued events and returns true if any touched the file.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;

        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    for event in events {
                        // Continuous events during active writes - wait for the final one
                        if matches!(event.kind, DebouncedEventKind::AnyContinuous) {
                            continue;
                        }
                        if self.is_watchlist(&event.path) {
                            changed = true;
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Watchlist watcher error: {:?}", e);
                }
            }
        }

        if changed {
            tracing::debug!("Watchlist file changed on disk");
        }
        changed
    }

    fn is_watchlist(&self, path: &Path) -> bool {
        // Compare by name: the watcher may report a canonicalized directory
        path.file_name().is_some() && path.file_name() == self.path.file_name()
    }
}
