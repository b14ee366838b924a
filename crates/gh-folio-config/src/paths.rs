//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-folio/`, `~/.cache/gh-folio/`
//! - macOS: `~/Library/Application Support/gh-folio/`, `~/Library/Caches/gh-folio/`
//! - Windows: `%APPDATA%\gh-folio\`, `%LOCALAPPDATA%\gh-folio\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-folio";

/// Get the application config directory
/// Returns ~/.config/gh-folio/ on Linux, ~/Library/Application Support/gh-folio/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
/// Returns ~/.cache/gh-folio/ on Linux, ~/Library/Caches/gh-folio/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
