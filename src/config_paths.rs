//! Where parsync keeps its files
//!
//! `config.yaml`, the `file-extensions.txt` watchlist and the `logs/` directory
//! sit together in one per-user directory.

use std::{env, io, path::PathBuf};

const APP_DIR: &str = "parsync";

/// `$XDG_CONFIG_HOME/parsync`, else `~/.config/parsync`; `%APPDATA%\parsync` on Windows
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Default watchlist location, unless `watchlist_path` overrides it
pub fn watchlist_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("file-extensions.txt"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory for the rolling log file
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no config directory available")
    })?;
    std::fs::create_dir_all(&logs)?;
    Ok(logs)
}
