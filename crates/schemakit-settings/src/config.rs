//! Configuration for the SchemaKit editor
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats, selected by file extension.
//!
//! Configuration is organized into two sections:
//! - Editor settings (grid, snapping, rotation, history depth)
//! - Component pin table (local pin offsets per component kind)

use crate::error::{Result, SettingsError};
use schemakit_core::constants::{
    DEFAULT_COMPONENT_KIND, DEFAULT_HISTORY_LIMIT, GRID_SIZE, ROTATION_STEP, SNAP_RADIUS,
};
use schemakit_core::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Editing engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing in world units
    pub grid_size: f64,
    /// Snap radius for pins, wire vertices and wire segments
    pub snap_radius: f64,
    /// Degrees added per rotate action
    pub rotation_step: u16,
    /// Maximum undo depth (0 = unbounded)
    pub history_limit: usize,
    /// Component kind placed by the place action
    pub default_component: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            snap_radius: SNAP_RADIUS,
            rotation_step: ROTATION_STEP,
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_component: DEFAULT_COMPONENT_KIND.to_string(),
        }
    }
}

/// Returns the built-in pin table: a two-pin resistor.
pub fn default_components() -> BTreeMap<String, Vec<Point>> {
    let mut components = BTreeMap::new();
    components.insert(
        DEFAULT_COMPONENT_KIND.to_string(),
        vec![Point::new(-20.0, 0.0), Point::new(20.0, 0.0)],
    );
    components
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editing engine settings
    #[serde(default)]
    pub editor: EditorSettings,
    /// Local pin offsets keyed by component kind
    #[serde(default = "default_components")]
    pub components: BTreeMap<String, Vec<Point>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorSettings::default(),
            components: default_components(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(SettingsError::UnsupportedFormat(
                    "Config file must be .json or .toml".to_string(),
                ))
            }
        };

        config.validate()?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            _ => {
                return Err(SettingsError::UnsupportedFormat(
                    "Config file must be .json or .toml".to_string(),
                ))
            }
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let editor = &self.editor;

        if !(editor.grid_size.is_finite() && editor.grid_size > 0.0) {
            return Err(SettingsError::invalid(
                "editor.grid_size",
                format!("must be positive and finite, got {}", editor.grid_size),
            ));
        }

        if !(editor.snap_radius.is_finite() && editor.snap_radius > 0.0) {
            return Err(SettingsError::invalid(
                "editor.snap_radius",
                format!("must be positive and finite, got {}", editor.snap_radius),
            ));
        }

        if editor.rotation_step == 0 || editor.rotation_step >= 360 || editor.rotation_step % 90 != 0
        {
            return Err(SettingsError::invalid(
                "editor.rotation_step",
                format!(
                    "must be 90, 180 or 270 degrees, got {}",
                    editor.rotation_step
                ),
            ));
        }

        if editor.default_component.trim().is_empty() {
            return Err(SettingsError::invalid(
                "editor.default_component",
                "must not be empty",
            ));
        }

        for (kind, pins) in &self.components {
            if let Some(pin) = pins.iter().find(|p| !(p.x.is_finite() && p.y.is_finite())) {
                return Err(SettingsError::invalid(
                    format!("components.{}", kind),
                    format!("pin offset {} is not finite", pin),
                ));
            }
        }

        Ok(())
    }

    /// Merge another config's pin table into this one. Entries in `other`
    /// replace entries of the same kind.
    pub fn merge_components(&mut self, other: &Config) {
        for (kind, pins) in &other.components {
            self.components.insert(kind.clone(), pins.clone());
        }
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
