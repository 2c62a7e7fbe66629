//! Application model - the complete state of the reformat layer
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod registry;
pub mod session;
pub mod trigger;

pub use registry::SessionRegistry;
pub use session::{DocumentSession, Mode};
pub use trigger::{FireDecision, TriggerSlot};

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Settings;
use crate::host::DocumentId;
use crate::watchlist::Watchlist;

/// The complete application model
#[derive(Debug)]
pub struct Model {
    /// Per-document sessions
    pub sessions: SessionRegistry,
    /// Current watchlist. Replaced wholesale on reload, never mutated in place.
    pub watchlist: Arc<Watchlist>,
    pub settings: Settings,
    /// Where the watchlist resource lives (None when no config dir exists)
    pub watchlist_path: Option<PathBuf>,
}

impl Model {
    pub fn new(settings: Settings, watchlist: Watchlist, watchlist_path: Option<PathBuf>) -> Self {
        Self {
            sessions: SessionRegistry::new(),
            watchlist: Arc::new(watchlist),
            settings,
            watchlist_path,
        }
    }

    /// Load settings and the watchlist from the user's config directory
    pub fn load() -> Self {
        let settings = Settings::load();
        let watchlist_path = settings.watchlist_file();
        let watchlist = match watchlist_path.as_deref() {
            Some(path) => Watchlist::load_or_create(path),
            None => {
                tracing::debug!("No config directory available, using default watchlist");
                Watchlist::default()
            }
        };
        Self::new(settings, watchlist, watchlist_path)
    }

    /// Whether a document path is eligible for automatic tracking
    pub fn is_watched(&self, path: &str) -> bool {
        self.watchlist.matches(path)
    }

    /// Swap in a freshly loaded watchlist
    pub fn replace_watchlist(&mut self, watchlist: Watchlist) {
        tracing::info!("Watchlist reloaded: {:?}", watchlist.patterns());
        self.watchlist = Arc::new(watchlist);
    }

    pub fn mode(&self, id: DocumentId) -> Option<Mode> {
        self.sessions.mode(id)
    }

    /// Status indicator text for a document, `None` when untracked or disabled
    pub fn status_label(&self, id: DocumentId) -> Option<&'static str> {
        self.mode(id).and_then(Mode::status_label)
    }

    pub fn quiescence_ms(&self) -> u64 {
        self.settings.quiescence_ms
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Settings::default(), Watchlist::default(), None)
    }
}
