//! Error types for the dk-core crate.
//!
//! This module provides the [`ConfigError`] type for configuration-related
//! errors that can occur across the workspace.

/// Errors that can occur during configuration loading and validation.
///
/// # Examples
///
/// ```
/// use dk_core::ConfigError;
///
/// let error = ConfigError::InvalidOption {
///     option: "indent_width".to_owned(),
///     reason: "must be positive".to_owned(),
/// };
/// assert!(error.to_string().contains("indent_width"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::InvalidOption {
            option: "tick_rate_ms".to_owned(),
            reason: "must be positive".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("tick_rate_ms"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let parse_err = serde_json::from_str::<crate::Config>("not json").unwrap_err();
        let error = ConfigError::from(parse_err);
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
