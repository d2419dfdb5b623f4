use crate::dialog::types::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config directory not found")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .ok_or(ConfigError::ConfigDirNotFound)?;

    let app_config_dir = config_dir.join("alert-dialog");
    Ok(app_config_dir.join("config.jsonc"))
}

/// Loads the configuration from the default path, writing the defaults
/// there first if no file exists yet.
pub fn load_or_create_config() -> Result<AppConfig> {
    let path = get_config_path()?;
    if !path.exists() {
        let config = AppConfig::new();
        save_config_to(&path, &config)?;
        info!(path = %path.display(), "Wrote default dialog config");
        return Ok(config);
    }
    load_config_from(&path)
}

/// Loads the configuration at `path`, stripping comments.
/// A missing file yields the default configuration.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::new());
    }

    let content = fs::read_to_string(path)?;
    let stripped = json_comments::StripComments::new(content.as_bytes());
    let config: AppConfig = serde_json::from_reader(stripped)?;

    info!(
        path = %path.display(),
        presets = config.presets.len(),
        "Loaded dialog config"
    );
    Ok(config)
}

/// Saves the configuration to `path`, creating parent directories.
/// Note: Comments in the original file will not be preserved.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
