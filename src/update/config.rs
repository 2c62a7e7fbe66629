//! Watchlist reload handling

use crate::commands::Cmd;
use crate::messages::ConfigMsg;
use crate::model::Model;

pub fn update_config(model: &mut Model, msg: ConfigMsg) -> Option<Cmd> {
    match msg {
        ConfigMsg::WatchlistFileChanged => {
            let path = model.watchlist_path.clone()?;
            Some(Cmd::LoadWatchlist { path })
        }

        ConfigMsg::WatchlistLoaded(watchlist) => {
            model.replace_watchlist(watchlist);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::watchlist::Watchlist;
    use std::path::PathBuf;

    #[test]
    fn test_file_change_requests_reload() {
        let mut model = Model::default();
        model.watchlist_path = Some(PathBuf::from("/cfg/exts.txt"));

        let cmd = update_config(&mut model, ConfigMsg::WatchlistFileChanged);
        assert_eq!(
            cmd,
            Some(Cmd::LoadWatchlist {
                path: PathBuf::from("/cfg/exts.txt")
            })
        );
    }

    #[test]
    fn test_file_change_without_path_is_ignored() {
        let mut model = Model::default();
        assert!(update_config(&mut model, ConfigMsg::WatchlistFileChanged).is_none());
    }

    #[test]
    fn test_loaded_watchlist_replaces_current() {
        let mut model = Model::default();
        update_config(
            &mut model,
            ConfigMsg::WatchlistLoaded(Watchlist::new([".rkt"])),
        );
        assert!(model.is_watched("main.rkt"));
        assert!(!model.is_watched("core.clj"));
    }
}
