//! User commands: enable, disable, toggle mode, edit watchlist

use crate::commands::Cmd;
use crate::host::DocumentId;
use crate::messages::CommandMsg;
use crate::model::Model;

/// Handle a command invoked against the active document
///
/// Session commands without an active document are silent no-ops.
pub fn update_command(
    model: &mut Model,
    active: Option<DocumentId>,
    command: CommandMsg,
) -> Option<Cmd> {
    match command {
        CommandMsg::Enable => {
            let id = active?;
            model.sessions.get_or_create(id).enable();
            tracing::info!("Enabled tracking for document {}", id.0);
            None
        }

        CommandMsg::Disable => {
            let id = active?;
            let session = model.sessions.get_mut(id)?;
            session.disable();
            tracing::info!("Disabled tracking for document {}", id.0);
            None
        }

        CommandMsg::ToggleMode => {
            let id = active?;
            // An untracked document starts out in the initial mode
            let mode = match model.sessions.get_mut(id) {
                Some(session) => session.toggle_mode(),
                None => model.sessions.get_or_create(id).mode,
            };
            tracing::info!("Document {} now in {:?}", id.0, mode);
            None
        }

        CommandMsg::EditWatchlist => match model.watchlist_path.clone() {
            Some(path) => Some(Cmd::OpenWatchlist { path }),
            None => {
                tracing::warn!("No config directory available, cannot edit watchlist");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;
    use std::path::PathBuf;

    const DOC: DocumentId = DocumentId(1);

    #[test]
    fn test_commands_without_active_document_are_noops() {
        let mut model = Model::default();
        for command in [CommandMsg::Enable, CommandMsg::Disable, CommandMsg::ToggleMode] {
            assert!(update_command(&mut model, None, command).is_none());
        }
        assert!(model.sessions.is_empty());
    }

    #[test]
    fn test_enable_creates_session_in_indent_mode() {
        let mut model = Model::default();
        update_command(&mut model, Some(DOC), CommandMsg::Enable);
        assert_eq!(model.mode(DOC), Some(Mode::IndentTracking));
    }

    #[test]
    fn test_disable_untracked_document_creates_nothing() {
        let mut model = Model::default();
        update_command(&mut model, Some(DOC), CommandMsg::Disable);
        assert!(model.sessions.is_empty());
    }

    #[test]
    fn test_toggle_cycle_through_commands() {
        let mut model = Model::default();
        update_command(&mut model, Some(DOC), CommandMsg::Enable);
        update_command(&mut model, Some(DOC), CommandMsg::Disable);
        assert_eq!(model.mode(DOC), Some(Mode::Disabled));

        update_command(&mut model, Some(DOC), CommandMsg::ToggleMode);
        assert_eq!(model.mode(DOC), Some(Mode::IndentTracking));
        update_command(&mut model, Some(DOC), CommandMsg::ToggleMode);
        assert_eq!(model.mode(DOC), Some(Mode::ParenTracking));
        update_command(&mut model, Some(DOC), CommandMsg::ToggleMode);
        assert_eq!(model.mode(DOC), Some(Mode::IndentTracking));
    }

    #[test]
    fn test_toggle_on_untracked_document_starts_indent_tracking() {
        let mut model = Model::default();
        update_command(&mut model, Some(DOC), CommandMsg::ToggleMode);
        assert_eq!(model.mode(DOC), Some(Mode::IndentTracking));
    }

    #[test]
    fn test_edit_watchlist_opens_resource() {
        let mut model = Model::default();
        model.watchlist_path = Some(PathBuf::from("/cfg/file-extensions.txt"));

        let cmd = update_command(&mut model, None, CommandMsg::EditWatchlist);
        assert_eq!(
            cmd,
            Some(Cmd::OpenWatchlist {
                path: PathBuf::from("/cfg/file-extensions.txt")
            })
        );
    }

    #[test]
    fn test_edit_watchlist_without_config_dir() {
        let mut model = Model::default();
        assert!(update_command(&mut model, Some(DOC), CommandMsg::EditWatchlist).is_none());
    }
}
