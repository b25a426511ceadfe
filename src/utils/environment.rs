use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the per-user configuration directory (`~/.config` on Linux)
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir().context("Could not determine the user configuration directory")
}
