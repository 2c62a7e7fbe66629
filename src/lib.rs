//! parsync - incremental structural reformatting for Lisp-family editors
//!
//! This crate keeps a live document's parentheses and indentation consistent
//! by re-running a structural formatter over the top-level expression around
//! the cursor after each burst of edits. It follows the Elm Architecture: host
//! notifications become [`Msg`]s, [`update`](update::update) turns them into
//! [`Cmd`]s, and the [`Runtime`] executes those against the host.

pub mod buffer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod fs_watcher;
pub mod host;
pub mod loop_guard;
pub mod messages;
pub mod model;
pub mod range;
pub mod reformat;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod watchlist;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::Settings;
pub use host::{Document, DocumentId, FormatError, FormatMode, Formatter, Host, Position};
pub use messages::Msg;
pub use model::{Mode, Model};
pub use runtime::Runtime;
pub use watchlist::Watchlist;
