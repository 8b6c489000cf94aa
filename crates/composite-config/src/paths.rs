//! Configuration and log directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/composite/`, `~/.cache/composite/`
//! - macOS: `~/Library/Application Support/composite/`, `~/Library/Caches/composite/`
//! - Windows: `%APPDATA%\composite\`, `%LOCALAPPDATA%\composite\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "composite";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create config directory {}", dir.display()))?;
    Ok(dir)
}

/// Get the directory session logs are written to
pub fn log_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME).join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;
    Ok(dir)
}

/// Path of a new, timestamped session log file
///
/// Debug builds log into the current directory for convenience, release builds
/// into [`log_dir`].
pub fn log_file_path(prefix: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("{}-{}.log", prefix, timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        log_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Get path to the global config file
pub fn global_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
