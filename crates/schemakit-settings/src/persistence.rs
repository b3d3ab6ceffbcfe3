//! Settings persistence.
//!
//! Locates the configuration file in the platform configuration directory
//! and loads it, falling back to defaults when no file exists yet.

use crate::config::Config;
use crate::error::{Result, SettingsError};
use std::path::{Path, PathBuf};

/// Loads and stores the configuration file.
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    path: PathBuf,
}

impl SettingsPersistence {
    /// Name of the application folder inside the platform config directory.
    pub const APP_DIR: &'static str = "schemakit";
    /// File name of the configuration file.
    pub const FILE_NAME: &'static str = "config.toml";

    /// Uses an explicit configuration file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses the platform default configuration file path.
    pub fn platform_default() -> Result<Self> {
        Ok(Self::with_path(Self::config_file_path()?))
    }

    /// Returns `<config dir>/schemakit/config.toml`.
    pub fn config_file_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform configuration directory".to_string())
        })?;
        Ok(dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Path this instance reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration file, or returns defaults when it does not
    /// exist. A file that exists but fails to parse or validate is an error.
    pub fn load_or_default(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::info!(
                path = %self.path.display(),
                "no configuration file found, using defaults"
            );
            return Ok(Config::default());
        }
        Config::load_from_file(&self.path)
    }

    /// Writes the configuration, creating the parent directory if needed.
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        config.save_to_file(&self.path)
    }
}
