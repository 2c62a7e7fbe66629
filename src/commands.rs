//! Commands - side effects returned from update functions
//!
//! Following the Elm Architecture, update functions never touch the host or
//! the filesystem themselves. They return `Cmd` values that the runtime
//! executes, feeding results back in as messages.

use std::path::PathBuf;

use crate::host::DocumentId;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command
    #[default]
    None,

    // === Reformat Commands ===
    /// Arm (or re-arm) the document's debounce timer
    /// After delay_ms, sends Msg::Reformat(Ready)
    DebouncedReformat {
        document_id: DocumentId,
        revision: u64,
        delay_ms: u64,
    },
    /// Drop the document's pending timer (document closed)
    CancelReformat { document_id: DocumentId },
    /// Run one reformat attempt against the host document
    /// Sends Msg::Reformat(Completed) when done
    RunReformat { document_id: DocumentId },
    /// One-time whole-document pass right after tracking starts
    NormalizeDocument { document_id: DocumentId },

    // === Watchlist Commands ===
    /// Create the watchlist resource if needed and open it in the host
    OpenWatchlist { path: PathBuf },
    /// Read the watchlist resource and send Msg::Config(WatchlistLoaded)
    LoadWatchlist { path: PathBuf },
}

impl Cmd {
    pub fn is_none(&self) -> bool {
        matches!(self, Cmd::None)
    }
}
