//! File System Utilities
//!
//! Platform directory lookup for configuration and log files.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("rs", "lang-switch", "lang-switch").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get the application's configuration directory without creating it
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/lang-switch/` or `$XDG_CONFIG_HOME/lang-switch/`
/// - **macOS**: `~/Library/Application Support/rs.lang-switch.lang-switch/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\lang-switch\lang-switch\config\`
pub fn config_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Get or create the directory for log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/lang-switch/logs/`
/// - **macOS**: `~/Library/Application Support/rs.lang-switch.lang-switch/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\lang-switch\lang-switch\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let log_dir = project_dirs()?.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}
