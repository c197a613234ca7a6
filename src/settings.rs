//! User settings persistence.
//!
//! This module handles loading and saving the command-line preferences:
//! a default fallback country and the output format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::codes::Iso2Code;

/// Errors that can occur while saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Failed to create the config directory
    #[error("Failed to create config directory: {0}")]
    CreateDirError(String),

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to write the settings file
    #[error("Failed to write settings file: {0}")]
    WriteError(String),
}

/// How the command-line tool prints results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
}

/// User settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Fallback country used when none is given on the command line
    #[serde(default)]
    pub default_fallback: Option<Iso2Code>,
    /// Output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_version() -> u32 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            default_fallback: None,
            output: OutputFormat::default(),
        }
    }
}

impl UserSettings {
    /// Get the config directory path for nameorder
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nameorder"))
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        match Self::get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from a file, using defaults if it is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::get_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save settings to a file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::CreateDirError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        std::fs::write(path, content).map_err(|e| SettingsError::WriteError(e.to_string()))?;

        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }
}
