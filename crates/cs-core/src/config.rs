//! Configuration structures for climascope.
//!
//! This module provides configuration types for all components of the
//! application:
//!
//! - [`SearchConfig`] - Canned search settings
//! - [`TuiConfig`] - Terminal UI settings (tick rate, colors)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with sensible values.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Color scheme for the TUI.
///
/// Controls the visual appearance of the terminal interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

impl ColorScheme {
    /// Returns the human-readable label for this scheme.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Configuration for the canned searches.
///
/// # Examples
///
/// ```
/// use cs_core::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.top_n, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How many records the strongest-typhoons search returns.
    pub top_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { top_n: 3 }
    }
}

/// Configuration for the terminal user interface.
///
/// Controls the visual and behavioral aspects of the TUI.
///
/// # Examples
///
/// ```
/// use cs_core::{ColorScheme, TuiConfig};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// UI refresh rate in milliseconds.
    ///
    /// Lower values provide smoother animations but use more CPU.
    pub tick_rate_ms: u64,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Root configuration for climascope.
///
/// Combines all component configurations into a single structure that can
/// be loaded from a JSON file or constructed programmatically.
///
/// # Examples
///
/// ```
/// use cs_core::Config;
///
/// // Create with defaults
/// let config = Config::default();
///
/// // Serialize to JSON
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canned search configuration.
    pub search: SearchConfig,

    /// Terminal UI configuration.
    pub tui: TuiConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a partial file like
    /// `{"search": {"top_n": 5}}` is valid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Validates the configuration.
    ///
    /// Rejects values that would make the application unusable, such as a
    /// zero tick rate or a zero-sized strongest-typhoons search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.top_n == 0 {
            return Err(ConfigError::InvalidOption {
                option: "search.top_n".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.tui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidOption {
                option: "tui.tick_rate_ms".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_tui_config_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"search": {"top_n": 5}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.search.top_n, 5);
        // Other fields should have defaults
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.tui.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.search.top_n = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.tui.tick_rate_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_color_scheme_labels() {
        assert_eq!(ColorScheme::Auto.label(), "Default");
        assert_eq!(ColorScheme::Dark.label(), "Dark");
        assert_eq!(ColorScheme::Light.label(), "Light");
    }

    #[test]
    fn test_color_scheme_serialization() {
        assert_eq!(
            serde_json::to_string(&ColorScheme::Auto).unwrap(),
            r#""auto""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Dark).unwrap(),
            r#""dark""#
        );
        assert_eq!(
            serde_json::to_string(&ColorScheme::Light).unwrap(),
            r#""light""#
        );
    }
}
