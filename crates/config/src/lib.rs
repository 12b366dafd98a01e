//! Configuration management for rhs.
//!
//! This crate provides configuration loading, saving, and validation
//! with support for TOML format and XDG directory conventions.

pub mod constants;
mod settings;
mod xdg;

pub use settings::{Config, GeneralSettings, LoggingSettings, PanelSettings};
pub use xdg::{get_config_dir, get_data_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const TOGGLE_KEY: char = '.';
    pub const PANEL_WIDTH: u16 = 40;
    pub const PANEL_EXPANDED_WIDTH: u16 = 80;
    pub const TRANSITION_MS: u64 = 200;
    pub const EXPAND_TRANSITION_MS: u64 = 150;
    pub const MIN_LOG_LEVEL: &str = "info";
}

impl Config {
    /// Load configuration from the XDG config file.
    ///
    /// On first run, creates the file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path.
    ///
    /// Missing files are created with defaults. Files with missing keys
    /// are rewritten in normalized form.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::validate_content(&original_content)?;

        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to the XDG config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join(constants::CONFIG_FILE_NAME))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }

    /// Panel width for the given expansion state.
    pub fn panel_width(&self, expanded: bool) -> u16 {
        if expanded {
            self.panel.expanded_width.max(self.panel.width)
        } else {
            self.panel.width
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.general.toggle_key, '.');
        assert_eq!(config.panel.width, 40);
        assert_eq!(config.panel.transition_ms, 200);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_partial_content_fills_defaults() {
        let config = Config::validate_content("[panel]\ntransition_ms = 0\n").unwrap();
        assert_eq!(config.panel.transition_ms, 0);
        assert_eq!(config.panel.width, defaults::PANEL_WIDTH);
        assert_eq!(config.general.toggle_key, defaults::TOGGLE_KEY);
    }

    #[test]
    fn test_invalid_content() {
        assert!(Config::validate_content("[panel]\nwidth = \"wide\"\n").is_err());
    }

    #[test]
    fn test_load_creates_file_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_normalizes_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[general]\ntoggle_key = \"/\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.general.toggle_key, '/');

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("expanded_width"));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_panel_width() {
        let mut config = Config::default();
        assert_eq!(config.panel_width(false), 40);
        assert_eq!(config.panel_width(true), 80);

        config.panel.expanded_width = 10;
        assert_eq!(config.panel_width(true), 40);
    }
}
