//! Configuration types, defaults, loading, and validation.

use crate::tui::onboarding::{ScrollAlign, ScrollOptions};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal UI layout and scrolling
    #[serde(default)]
    pub ui: UiConfig,

    /// Wizard defaults
    #[serde(default)]
    pub wizard: WizardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log to file
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Width of the wizard box in columns (default: 72)
    #[serde(default = "default_box_width")]
    pub box_width: u16,

    /// Rows left above a step when scrolling to it (default: 1)
    #[serde(default = "default_scroll_margin")]
    pub scroll_margin: u16,

    /// Where a step lands after scrolling: "start" or "center"
    #[serde(default)]
    pub scroll_align: ScrollAlign,
}

fn default_box_width() -> u16 {
    72
}

fn default_scroll_margin() -> u16 {
    1
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            box_width: default_box_width(),
            scroll_margin: default_scroll_margin(),
            scroll_align: ScrollAlign::default(),
        }
    }
}

impl UiConfig {
    pub fn scroll_options(&self) -> ScrollOptions {
        ScrollOptions {
            align: self.scroll_align,
            margin: self.scroll_margin,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Username draft to start with. It still has to be confirmed.
    #[serde(default)]
    pub username: Option<String>,
}

/// Base directory for fediwizard files: `<config dir>/fediwizard/`
pub fn fediwizard_home() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fediwizard")
}

/// Where debug log files go
pub fn log_dir() -> PathBuf {
    fediwizard_home().join("logs")
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. Default values
    /// 2. The file `discover` finds
    /// 3. Environment variables
    pub fn load() -> Result<Self> {
        let config = match Self::discover() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(Self::apply_env_overrides(config))
    }

    /// Config file `load` reads: ./fediwizard.toml if present, otherwise
    /// <config dir>/fediwizard/config.toml
    pub fn discover() -> Option<PathBuf> {
        [Self::local_config_path(), Self::system_config_path()]
            .into_iter()
            .find(|path| path.exists())
    }

    /// Load configuration from a specific file path, then apply environment
    /// overrides
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {:?}", path);
        }
        Ok(Self::apply_env_overrides(Self::from_file(path)?))
    }

    /// Get the system config path: <config dir>/fediwizard/config.toml
    pub fn system_config_path() -> PathBuf {
        fediwizard_home().join("config.toml")
    }

    /// Get the local config path: ./fediwizard.toml
    fn local_config_path() -> PathBuf {
        PathBuf::from("./fediwizard.toml")
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    fn apply_env_overrides(config: Self) -> Self {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply `FEDIWIZARD_*` overrides read through `lookup`
    fn apply_overrides(mut config: Self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = lookup("FEDIWIZARD_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("FEDIWIZARD_LOG_FILE") {
            config.logging.file = Some(PathBuf::from(file));
        }

        if let Some(username) = lookup("FEDIWIZARD_USERNAME") {
            config.wizard.username = Some(username);
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "Invalid log level: {}. Must be one of: {:?}",
                self.logging.level,
                valid_levels
            );
        }

        if self.ui.box_width < 20 {
            anyhow::bail!(
                "ui.box_width must be at least 20 columns, got {}",
                self.ui.box_width
            );
        }

        Ok(())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        tracing::info!("Configuration saved to: {:?}", path);
        Ok(())
    }
}
