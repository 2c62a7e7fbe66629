//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod command;
mod config;
mod document;
mod reformat;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::Model;

pub use command::update_command;
pub use config::update_config;
pub use document::update_document;
pub use reformat::{schedule_reformat, update_reformat};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut Model, msg: Msg) -> Option<Cmd> {
    tracing::trace!("update: {:?}", msg);

    match msg {
        Msg::Document(m) => update_document(model, m),
        Msg::Command { active, command } => update_command(model, active, command),
        Msg::Reformat(m) => update_reformat(model, m),
        Msg::Config(m) => update_config(model, m),
    }
}
