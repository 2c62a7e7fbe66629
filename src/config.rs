//! Settings persistence
//!
//! Stores user preferences in `~/.config/parsync/config.yaml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default quiescence interval before a reformat attempt fires
pub const DEFAULT_QUIESCENCE_MS: u64 = 10;

/// Settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Debounce window in milliseconds
    #[serde(default = "default_quiescence_ms")]
    pub quiescence_ms: u64,

    /// Run a whole-document paren pass when a watched document opens
    #[serde(default = "default_normalize_on_open")]
    pub normalize_on_open: bool,

    /// Overrides the default watchlist location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchlist_path: Option<PathBuf>,
}

fn default_quiescence_ms() -> u64 {
    DEFAULT_QUIESCENCE_MS
}

fn default_normalize_on_open() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quiescence_ms: default_quiescence_ms(),
            normalize_on_open: default_normalize_on_open(),
            watchlist_path: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Effective watchlist location: the override, else the config dir default
    pub fn watchlist_file(&self) -> Option<PathBuf> {
        self.watchlist_path
            .clone()
            .or_else(crate::config_paths::watchlist_file)
    }
}
