//! SchemaKit Settings Crate
//!
//! Handles editor configuration, the component pin table, and settings
//! persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, EditorSettings};
pub use error::{Result, SettingsError};
pub use persistence::SettingsPersistence;
