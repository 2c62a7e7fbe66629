//! Host document notifications: open, change, cursor, save, close

use std::path::Path;

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::Model;

use super::reformat::schedule_reformat;

/// Handle document lifecycle and edit notifications
pub fn update_document(model: &mut Model, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::Opened { document_id, path } => {
            let path = path?;
            if !model.is_watched(&path) {
                tracing::trace!("Not tracking {}: no watchlist match", path);
                return None;
            }
            if model.sessions.contains(document_id) {
                return None;
            }

            model.sessions.get_or_create(document_id);
            tracing::info!("Tracking {} (document {})", path, document_id.0);

            model
                .settings
                .normalize_on_open
                .then_some(Cmd::NormalizeDocument { document_id })
        }

        DocumentMsg::Changed { document_id } | DocumentMsg::CursorMoved { document_id } => {
            schedule_reformat(model, document_id)
        }

        DocumentMsg::Saved { path, .. } => {
            let saved = path?;
            let watchlist_path = model.watchlist_path.as_ref()?;
            if Path::new(&saved) != watchlist_path.as_path() {
                return None;
            }
            tracing::debug!("Watchlist saved, reloading");
            Some(Cmd::LoadWatchlist {
                path: watchlist_path.clone(),
            })
        }

        DocumentMsg::Closed { document_id } => {
            model.sessions.remove(document_id)?;
            Some(Cmd::CancelReformat { document_id })
        }
    }
}
