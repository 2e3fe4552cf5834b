//! Configuration settings for studyflow.
//!
//! Settings are loaded from `<data dir>/config.yaml`. Every field has a
//! default, so a partial file (or none at all) is valid.

use std::fmt;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::StudyError;
use crate::features::music::{self, DEFAULT_VOLUME};
use crate::features::progress::DEFAULT_MAX_RETRIES;
use crate::features::timer::{validate_break_minutes, validate_focus_minutes, SessionConfig};
use crate::output::OutputFormat;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub timer: TimerConfig,
    pub music: MusicConfig,
    pub appearance: AppearanceConfig,
    pub sync: SyncConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Profile the progress is recorded under.
    pub user: String,
    /// Default output format.
    pub default_output: OutputFormat,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus phase length in minutes (1-60).
    pub focus_minutes: u32,
    /// Break phase length in minutes (1-30).
    pub break_minutes: u32,
    /// Start the next phase immediately instead of pausing at the boundary.
    pub auto_continue: bool,
    /// Ring the terminal bell when a phase completes.
    pub bell: bool,
}

/// Ambient music settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MusicConfig {
    /// Preset id (`lofi`, `rain`, `cafe`, `white-noise`).
    pub preset: String,
    /// Custom stream URL; takes priority over the preset.
    pub custom_url: Option<String>,
    /// Volume 0-100.
    pub volume: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppearanceConfig {
    pub theme: Theme,
}

/// Persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SyncConfig {
    /// Retries after a conflicting profile write.
    pub max_retries: u32,
}

/// Color theme.
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Pastel,
    Dark,
    Ocean,
    Forest,
    Minimal,
}

impl Theme {
    pub const ALL: [Self; 5] = [
        Self::Pastel,
        Self::Dark,
        Self::Ocean,
        Self::Forest,
        Self::Minimal,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Pastel => "pastel",
            Self::Dark => "dark",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Minimal => "minimal",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pastel => "Pastel",
            Self::Dark => "Dark",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
            Self::Minimal => "Minimal",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            user: "local".to_string(),
            default_output: OutputFormat::Pretty,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        let session = SessionConfig::default();
        Self {
            focus_minutes: session.focus_minutes(),
            break_minutes: session.break_minutes(),
            auto_continue: false,
            bell: true,
        }
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            preset: "lofi".to_string(),
            custom_url: None,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl TimerConfig {
    /// Validated timer durations.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidDuration` if either length is out of range.
    pub fn session_config(&self) -> Result<SessionConfig, StudyError> {
        SessionConfig::new(self.focus_minutes, self.break_minutes)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is invalid.
    pub fn load() -> Result<Self, StudyError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is invalid.
    pub fn load_from_path(path: &Path) -> Result<Self, StudyError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StudyError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            StudyError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate().map_err(|e| {
            StudyError::Config(format!("Invalid config file {}: {e}", path.display()))
        })?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<(), StudyError> {
        validate_focus_minutes(self.timer.focus_minutes)?;
        validate_break_minutes(self.timer.break_minutes)?;
        music::validate_volume(self.music.volume)?;
        if let Some(url) = &self.music.custom_url {
            music::validate_custom_url(url)?;
        }
        if self.general.user.trim().is_empty() {
            return Err(StudyError::InvalidInput("user must not be empty".to_string()));
        }
        Ok(())
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), StudyError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), StudyError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| StudyError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            StudyError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
