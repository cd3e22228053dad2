//! Demo configuration persistence
//!
//! Saves and loads pad length, texts and style overrides.

use std::fs;
use std::path::{Path, PathBuf};

use pincode_core::PadTexts;
use serde::{Deserialize, Serialize};

use crate::ui::style::PadStyle;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "pincode-pad";

/// Longest PIN the demo accepts
pub const MAX_PASSWORD_LENGTH: usize = 12;

/// Demo configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Digits per PIN
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Redraw interval while nothing is animating
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Simulated delay of the unlock check
    #[serde(default = "default_verify_latency_ms")]
    pub verify_latency_ms: u64,

    #[serde(default)]
    pub high_contrast: bool,

    #[serde(default)]
    pub texts: TextsConfig,

    #[serde(default)]
    pub style: PadStyle,
}

/// Texts for each pad screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextsConfig {
    pub choose: ScreenTexts,
    pub confirm: ScreenTexts,
    pub enter: ScreenTexts,
}

/// Texts for one screen; serialisable mirror of [`PadTexts`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTexts {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default = "default_title_attempt_failed")]
    pub title_attempt_failed: String,
    #[serde(default = "default_title_confirm_failed")]
    pub title_confirm_failed: String,
    #[serde(default = "default_subtitle_error")]
    pub subtitle_error: String,
}

fn default_password_length() -> usize {
    4
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_verify_latency_ms() -> u64 {
    600
}

fn default_title_attempt_failed() -> String {
    "Incorrect PIN Code".to_string()
}

fn default_title_confirm_failed() -> String {
    "Your entries did not match".to_string()
}

fn default_subtitle_error() -> String {
    "Please try again".to_string()
}

impl ScreenTexts {
    fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            title_attempt_failed: default_title_attempt_failed(),
            title_confirm_failed: default_title_confirm_failed(),
            subtitle_error: default_subtitle_error(),
        }
    }
}

impl From<&ScreenTexts> for PadTexts {
    fn from(texts: &ScreenTexts) -> Self {
        PadTexts {
            sentence_title: texts.title.clone(),
            subtitle: texts.subtitle.clone(),
            title_attempt_failed: texts.title_attempt_failed.clone(),
            title_confirm_failed: texts.title_confirm_failed.clone(),
            subtitle_error: texts.subtitle_error.clone(),
        }
    }
}

impl Default for TextsConfig {
    fn default() -> Self {
        Self {
            choose: ScreenTexts::new("1 - Enter a PIN Code", "to keep your information secure"),
            confirm: ScreenTexts::new("2 - Confirm your PIN Code", ""),
            enter: ScreenTexts::new("Enter your PIN Code", "to unlock"),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            password_length: default_password_length(),
            tick_rate_ms: default_tick_rate_ms(),
            verify_latency_ms: default_verify_latency_ms(),
            high_contrast: false,
            texts: TextsConfig::default(),
            style: PadStyle::default(),
        }
    }
}

impl DemoConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
            return Some(path);
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let config = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check values a pad cannot be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.password_length == 0 || self.password_length > MAX_PASSWORD_LENGTH {
            return Err(ConfigError::InvalidLength(self.password_length));
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("PIN length must be between 1 and {MAX_PASSWORD_LENGTH}, got {0}")]
    InvalidLength(usize),

    #[error("Tick rate must be positive")]
    InvalidTickRate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DemoConfig::default();
        assert_eq!(config.password_length, 4);
        assert!(!config.high_contrast);
        assert_eq!(config.texts.enter.title, "Enter your PIN Code");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = DemoConfig {
            password_length: 6,
            verify_latency_ms: 50,
            ..DemoConfig::default()
        };
        config.style.circle_full = Some('*');

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DemoConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let parsed: DemoConfig =
            serde_json::from_str(r#"{"password_length": 5, "texts": {"enter": {"title": "Unlock"}}}"#)
                .unwrap();

        assert_eq!(parsed.password_length, 5);
        assert_eq!(parsed.tick_rate_ms, 250);
        assert_eq!(parsed.texts.enter.title, "Unlock");
        assert_eq!(parsed.texts.enter.subtitle_error, "Please try again");
        assert_eq!(parsed.texts.choose, TextsConfig::default().choose);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = DemoConfig {
            password_length: 6,
            high_contrast: true,
            ..DemoConfig::default()
        };

        config.save_to(&path).unwrap();

        assert_eq!(DemoConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_or_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert_eq!(DemoConfig::load_from(&path), DemoConfig::default());

        fs::write(&path, "{ not json").unwrap();
        assert_eq!(DemoConfig::load_from(&path), DemoConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"password_length": 0}"#).unwrap();
        assert_eq!(DemoConfig::load_from(&path), DemoConfig::default());

        let config = DemoConfig {
            password_length: MAX_PASSWORD_LENGTH + 1,
            ..DemoConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidLength(_))));
    }
}
