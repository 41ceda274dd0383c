//! Settings Definition
//!
//! Pipeline configuration schema and on-disk persistence.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid temperature {0}: must be between 0.0 and 1.0")]
    InvalidTemperature(f32),
}

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub recognition: RecognitionSettings,
    pub judge: JudgeSettings,
    pub reading: ReadingSettings,
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.judge.temperature) {
            return Err(SettingsError::InvalidTemperature(self.judge.temperature));
        }
        Ok(())
    }

    /// Load settings from disk, using defaults when no file exists
    pub fn load() -> Result<Self, SettingsError> {
        let path = config_file();

        if !path.exists() {
            tracing::info!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;

        tracing::info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = config_file();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Settings saved to {:?}", path);
        Ok(())
    }
}

/// Speech recognition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionSettings {
    /// Language code (BCP 47) sent to the recognition provider
    pub language: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            timeout_seconds: 10,
        }
    }
}

/// Judging provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeSettings {
    /// Model identifier sent to the judging provider
    pub model: String,
    /// Creativity parameter: 0.0 deterministic, 1.0 most varied
    pub temperature: f32,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// API key stored in the settings file (middle step of the
    /// credential precedence chain)
    pub api_key: Option<String>,
}

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            model: "llama3-8b-8192".to_string(),
            temperature: 0.5,
            timeout_seconds: 30,
            api_key: None,
        }
    }
}

/// Read-aloud passage settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReadingSettings {
    /// Optional file supplying the read-aloud passage; the built-in
    /// default passage is used when unset or unreadable
    pub passage_file: Option<PathBuf>,
}

/// Get the configuration directory path
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("dev", "speakeval", "Speakeval")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("config"))
}

/// Get the configuration file path
pub fn config_file() -> PathBuf {
    config_dir().join("settings.toml")
}
