//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::host::DocumentId;
use crate::reformat::{ReformatError, ReformatOutcome};
use crate::watchlist::Watchlist;

/// Notifications raised by the host for a single document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// A document was opened; `path` is its identifier for watchlist matching
    Opened {
        document_id: DocumentId,
        path: Option<String>,
    },
    /// Text changed (user edit or our own write)
    Changed { document_id: DocumentId },
    /// Primary cursor moved
    CursorMoved { document_id: DocumentId },
    /// Document was saved to `path`
    Saved {
        document_id: DocumentId,
        path: Option<String>,
    },
    /// Document was closed
    Closed { document_id: DocumentId },
}

/// User commands from the host's command dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandMsg {
    Enable,
    Disable,
    ToggleMode,
    EditWatchlist,
}

/// Reformat scheduling messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReformatMsg {
    /// Quiescence interval elapsed for the timer armed at `revision`
    Ready {
        document_id: DocumentId,
        revision: u64,
    },
    /// An attempt finished (applied, skipped or aborted)
    Completed {
        document_id: DocumentId,
        result: Result<ReformatOutcome, ReformatError>,
    },
}

/// Watchlist configuration messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigMsg {
    /// The watchlist resource changed on disk
    WatchlistFileChanged,
    /// A fresh watchlist finished loading
    WatchlistLoaded(Watchlist),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host document notifications
    Document(DocumentMsg),
    /// Command invoked against the active document (if any)
    Command {
        active: Option<DocumentId>,
        command: CommandMsg,
    },
    /// Debounce and attempt lifecycle
    Reformat(ReformatMsg),
    /// Watchlist reloads
    Config(ConfigMsg),
}

impl From<DocumentMsg> for Msg {
    fn from(msg: DocumentMsg) -> Self {
        Msg::Document(msg)
    }
}

impl From<ReformatMsg> for Msg {
    fn from(msg: ReformatMsg) -> Self {
        Msg::Reformat(msg)
    }
}

impl From<ConfigMsg> for Msg {
    fn from(msg: ConfigMsg) -> Self {
        Msg::Config(msg)
    }
}
