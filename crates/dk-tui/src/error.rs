//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for handling errors
//! that can occur during TUI operations.

use thiserror::Error;

/// Errors that can occur in the TUI.
///
/// This enum captures all error conditions specific to the terminal
/// user interface, including terminal initialization failures, event
/// handling issues, and navigation-core errors surfaced at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// The route table failed validation.
    ///
    /// Fatal: surfaced before the terminal is entered.
    #[error("route table error: {0}")]
    Routes(#[from] dk_nav::RouteTableError),

    /// A navigation request failed.
    ///
    /// Only fatal when it is the initial navigation requested at startup;
    /// inside the running shell unresolved paths stay in the status bar.
    #[error("navigation error: {0}")]
    Navigation(#[from] dk_nav::NavigationError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl TuiError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// Non-recoverable errors typically require restarting the TUI.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Navigation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = TuiError::config("invalid tick rate");
        assert!(matches!(err, TuiError::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let err = TuiError::ChannelClosed;
        assert_eq!(err.to_string(), "event channel closed unexpectedly");
    }

    #[test]
    fn test_is_recoverable() {
        let not_found = TuiError::from(dk_nav::NavigationError::NotFound("/x".to_owned()));
        assert!(not_found.is_recoverable());
        assert!(!TuiError::ChannelClosed.is_recoverable());
        assert!(!TuiError::config("test").is_recoverable());
    }
}
