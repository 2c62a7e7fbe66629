//! Debounce and serialization of reformat attempts
//!
//! ```text
//! Change/CursorMoved → Cmd::DebouncedReformat (quiescence timer)
//!     → Msg::Reformat(Ready) → Cmd::RunReformat
//!     → (runtime) → Msg::Reformat(Completed) → re-arm if edits landed meanwhile
//! ```

use crate::commands::Cmd;
use crate::host::DocumentId;
use crate::messages::ReformatMsg;
use crate::model::{FireDecision, Model};

/// Handle reformat scheduling messages
pub fn update_reformat(model: &mut Model, msg: ReformatMsg) -> Option<Cmd> {
    match msg {
        ReformatMsg::Ready {
            document_id,
            revision,
        } => {
            let Some(session) = model.sessions.get_mut(document_id) else {
                tracing::debug!(
                    "update_reformat: no session for document {}, dropping Ready",
                    document_id.0
                );
                return None;
            };

            if !session.mode.is_enabled() {
                return None;
            }

            match session.trigger.fire(revision) {
                FireDecision::Run => Some(Cmd::RunReformat { document_id }),
                FireDecision::Stale => {
                    tracing::trace!(
                        "Coalesced stale trigger for document {}: rev {} != {}",
                        document_id.0,
                        revision,
                        session.trigger.revision()
                    );
                    None
                }
                FireDecision::Deferred => {
                    tracing::debug!(
                        "Attempt in flight for document {}, deferring rev {}",
                        document_id.0,
                        revision
                    );
                    None
                }
            }
        }

        ReformatMsg::Completed {
            document_id,
            result,
        } => {
            match &result {
                Ok(outcome) => {
                    tracing::trace!("Reformat of document {} ended: {:?}", document_id.0, outcome)
                }
                Err(e) => tracing::error!("Reformat of document {} aborted: {}", document_id.0, e),
            }

            let delay_ms = model.quiescence_ms();
            let session = model.sessions.get_mut(document_id)?;
            let revision = session.trigger.complete()?;

            Some(Cmd::DebouncedReformat {
                document_id,
                revision,
                delay_ms,
            })
        }
    }
}

/// Record a change/cursor notification and arm the debounce timer
///
/// Returns `None` for untracked or disabled documents, and while an attempt is
/// in flight (completion re-arms instead).
pub fn schedule_reformat(model: &mut Model, document_id: DocumentId) -> Option<Cmd> {
    let delay_ms = model.quiescence_ms();
    let session = model.sessions.get_mut(document_id)?;

    if !session.mode.is_enabled() {
        return None;
    }

    let revision = session.trigger.notify()?;
    Some(Cmd::DebouncedReformat {
        document_id,
        revision,
        delay_ms,
    })
}
