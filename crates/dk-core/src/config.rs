//! Configuration structures for devkit.
//!
//! This module provides configuration types for all components of the
//! application:
//!
//! - [`TuiConfig`] - Terminal UI settings (tick rate, frame rate, colors)
//! - [`FormatConfig`] - JSON formatter settings (indent width)
//! - [`HashConfig`] - Hash calculator settings (default algorithm)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] with sensible values, and
//! every struct carries `#[serde(default)]` so a partial configuration file
//! deserializes cleanly.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::digest::HashAlgorithm;
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
    /// Returns `true` if this scheme should render with the dark palette.
    ///
    /// [`ColorScheme::Auto`] resolves to dark, matching most terminals.
    #[inline]
    #[must_use]
    pub const fn is_dark(self) -> bool {
        !matches!(self, Self::Light)
    }
}

/// Configuration for the terminal user interface.
///
/// Controls the visual and behavioral aspects of the TUI.
///
/// # Examples
///
/// ```
/// use dk_core::{ColorScheme, TuiConfig};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// UI tick rate in milliseconds.
    ///
    /// Lower values make status messages expire more promptly but use
    /// more CPU.
    pub tick_rate_ms: u64,

    /// Render rate in frames per second.
    pub frame_rate: u64,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Configuration for the JSON formatter.
///
/// # Examples
///
/// ```
/// use dk_core::FormatConfig;
///
/// let config = FormatConfig::default();
/// assert_eq!(config.indent_width, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Number of spaces per indentation level in pretty output.
    pub indent_width: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

/// Configuration for the hash calculator.
///
/// # Examples
///
/// ```
/// use dk_core::{HashAlgorithm, HashConfig};
///
/// let config = HashConfig::default();
/// assert_eq!(config.default_algorithm, HashAlgorithm::Sha256);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Algorithm selected when the hash calculator page opens.
    pub default_algorithm: HashAlgorithm,
}

/// Root configuration for devkit.
///
/// Combines all component configurations into a single structure that can be
/// loaded from a configuration file or constructed programmatically.
///
/// # Examples
///
/// ```
/// use dk_core::Config;
///
/// // Create with defaults
/// let config = Config::default();
///
/// // Serialize to JSON
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal UI configuration.
    pub tui: TuiConfig,

    /// JSON formatter configuration.
    pub format: FormatConfig,

    /// Hash calculator configuration.
    pub hash: HashConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a partial file such as
    /// `{"tui": {"color_scheme": "dark"}}` is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid JSON.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_std_path())?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_config_defaults() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.color_scheme, ColorScheme::Auto);
    }

    #[test]
    fn test_format_config_defaults() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_width, 2);
    }

    #[test]
    fn test_hash_config_defaults() {
        let config = HashConfig::default();
        assert_eq!(config.default_algorithm, HashAlgorithm::Sha256);
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
        let json = r#"{"tui": {"color_scheme": "dark"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.tui.color_scheme, ColorScheme::Dark);
        // Other fields should have defaults
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.format.indent_width, 2);
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

    #[test]
    fn test_color_scheme_is_dark() {
        assert!(ColorScheme::Auto.is_dark());
        assert!(ColorScheme::Dark.is_dark());
        assert!(!ColorScheme::Light.is_dark());
    }
}
