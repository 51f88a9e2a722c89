//! Configuration management for gesture-player.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, range validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{CONFIG_PATH_ENV, ClassifierConfig, LoggingConfig, PlayerConfig, ServerConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Gesture classification settings.
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Player startup settings.
    #[serde(default)]
    pub player: PlayerConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from disk, creating a default file if none exists.
    ///
    /// The path comes from `GESTURE_PLAYER_CONFIG` when set, otherwise the
    /// platform config directory.
    #[track_caller]
    pub fn load() -> AppResult<Self> {
        let config_path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            info!(config_path = ?config_path, "No config found, default created");
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config = Self::parse(&contents)?;

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    #[track_caller]
    pub fn parse(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let threshold = self.classifier.confidence_threshold;
        if !(0.0..1.0).contains(&threshold) {
            return Err(AppError::ConfigError {
                reason: format!(
                    "classifier.confidence_threshold must be in [0, 1), got {}",
                    threshold
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.classifier.timeout_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "classifier.timeout_ms must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let stub_confidence = self.classifier.stub_confidence;
        if !(0.0..=1.0).contains(&stub_confidence) {
            return Err(AppError::ConfigError {
                reason: format!(
                    "classifier.stub_confidence must be in [0, 1], got {}",
                    stub_confidence
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.player.initial_video.trim().is_empty() {
            return Err(AppError::ConfigError {
                reason: "player.initial_video must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Save configuration using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(dir) = config_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
                debug!(config_dir = ?dir, "Created config directory");
            }
        }

        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[track_caller]
    fn default_config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "gesture-player", "Gesture-Player").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
