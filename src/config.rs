//! Configuration management for ticklist
//!
//! This module handles loading, parsing, and validation of configuration files.
//! Every section is optional; missing keys fall back to defaults.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, NOTIFICATION_TIMEOUT_MAX_MS, NOTIFICATION_TIMEOUT_MIN_MS,
    NOTIFICATION_TIMEOUT_MS, TWO_COLUMN_MIN_WIDTH, TWO_COLUMN_MIN_WIDTH_LOWER, TWO_COLUMN_MIN_WIDTH_UPPER,
};
use crate::error::ConfigError;
use crate::icons::IconTheme;
use crate::store::UiState;
use crate::utils::datetime;
use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub notifications: NotificationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Start in dark mode
    pub dark_mode: bool,
    /// Show the welcome banner on startup
    pub show_banner: bool,
    /// Terminal width from which Active and Done panels sit side by side
    pub two_column_min_width: u16,
    /// Glyph set: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
}

/// Toast notification configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    /// How long a toast stays visible, in milliseconds
    pub timeout_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show when each todo was created
    pub show_created_at: bool,
    /// Time format for todos created today
    pub time_format: String,
    /// Date format for older todos
    pub date_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file
    pub enabled: bool,
    /// Minimum level written to the log file
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_banner: true,
            two_column_min_width: TWO_COLUMN_MIN_WIDTH,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: NOTIFICATION_TIMEOUT_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_created_at: true,
            time_format: datetime::DEFAULT_TIME_FORMAT.to_string(),
            date_format: datetime::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        match self.level.to_ascii_lowercase().as_str() {
            "error" => Ok(log::LevelFilter::Error),
            "warn" => Ok(log::LevelFilter::Warn),
            "info" => Ok(log::LevelFilter::Info),
            "debug" => Ok(log::LevelFilter::Debug),
            "trace" => Ok(log::LevelFilter::Trace),
            _ => Err(ConfigError::UnknownLogLevel(self.level.clone())),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timeout = self.notifications.timeout_ms;
        if !(NOTIFICATION_TIMEOUT_MIN_MS..=NOTIFICATION_TIMEOUT_MAX_MS).contains(&timeout) {
            return Err(ConfigError::TimeoutOutOfRange {
                value: timeout,
                min: NOTIFICATION_TIMEOUT_MIN_MS,
                max: NOTIFICATION_TIMEOUT_MAX_MS,
            });
        }

        let breakpoint = self.ui.two_column_min_width;
        if !(TWO_COLUMN_MIN_WIDTH_LOWER..=TWO_COLUMN_MIN_WIDTH_UPPER).contains(&breakpoint) {
            return Err(ConfigError::BreakpointOutOfRange {
                value: breakpoint,
                min: TWO_COLUMN_MIN_WIDTH_LOWER,
                max: TWO_COLUMN_MIN_WIDTH_UPPER,
            });
        }

        validate_format("display.time_format", &self.display.time_format)?;
        validate_format("display.date_format", &self.display.date_format)?;

        self.logging.level_filter()?;

        Ok(())
    }

    /// Initial UI slice derived from the configured startup flags
    pub fn initial_ui_state(&self) -> UiState {
        UiState {
            dark_mode: self.ui.dark_mode,
            show_banner: self.ui.show_banner,
            ..UiState::default()
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# ticklist configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DEFAULT_DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

fn validate_format(field: &'static str, format: &str) -> Result<(), ConfigError> {
    if format.is_empty() {
        return Err(ConfigError::InvalidFormat {
            field,
            format: format.to_string(),
            reason: "format is empty".to_string(),
        });
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidFormat {
            field,
            format: format.to_string(),
            reason: "unrecognized strftime specifier".to_string(),
        });
    }
    Ok(())
}
