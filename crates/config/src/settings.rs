//! Configuration structures for rhs settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub panel: PanelSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Key pressed together with Ctrl/Cmd to toggle the panel
    #[serde(default = "default_toggle_key")]
    pub toggle_key: char,
}

/// Right-hand side panel geometry and animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Panel width in columns
    #[serde(default = "default_width")]
    pub width: u16,

    /// Panel width in columns while expanded
    #[serde(default = "default_expanded_width")]
    pub expanded_width: u16,

    /// Slide transition duration in ms (0 disables the transition)
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Width transition duration in ms
    #[serde(default = "default_expand_transition_ms")]
    pub expand_transition_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

fn default_toggle_key() -> char {
    defaults::TOGGLE_KEY
}

fn default_width() -> u16 {
    defaults::PANEL_WIDTH
}

fn default_expanded_width() -> u16 {
    defaults::PANEL_EXPANDED_WIDTH
}

fn default_transition_ms() -> u64 {
    defaults::TRANSITION_MS
}

fn default_expand_transition_ms() -> u64 {
    defaults::EXPAND_TRANSITION_MS
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            toggle_key: default_toggle_key(),
        }
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            width: default_width(),
            expanded_width: default_expanded_width(),
            transition_ms: default_transition_ms(),
            expand_transition_ms: default_expand_transition_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}
