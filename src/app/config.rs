//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// Config file name inside the archive directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Load configuration from `<archive>/config.toml`, falling back to defaults
/// when the file does not exist.
pub fn load_config(archive_root: &Path) -> Result<AppConfig, AppError> {
    let path = archive_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}
