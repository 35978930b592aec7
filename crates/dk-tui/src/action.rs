//! User actions for the TUI.
//!
//! This module defines the [`Action`] enum representing all user-initiated
//! actions that can be performed in the TUI. Actions are the result of
//! processing input events (key presses) and are used to update application
//! state.
//!
//! # Action Flow
//!
//! ```text
//! Key Event → App / Page → Action → App State Update
//! ```

/// User-initiated actions in the TUI.
///
/// Actions represent commands that modify application state. They are
/// produced by the app's key dispatch and by page components, and are
/// processed by the application's update loop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Navigate to a route path (e.g. `/json`).
    Navigate(String),

    /// Go back one entry in the navigation history.
    NavigateBack,

    /// Go forward one entry in the navigation history.
    NavigateForward,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Flip the dark-mode flag in the UI state store.
    ToggleDarkMode,

    // =========================================================================
    // Goto Overlay
    // =========================================================================
    /// Open the path-input overlay.
    EnterGotoMode,

    /// Close the path-input overlay without navigating.
    ExitGotoMode,

    /// Navigate to the path typed into the overlay.
    SubmitGoto,

    // =========================================================================
    // Page Editing
    // =========================================================================
    /// Route keystrokes to the active page's input buffer.
    EnterEditMode,

    /// Return keystrokes to normal-mode dispatch.
    ExitEditMode,

    // =========================================================================
    // Help & Status
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    /// Hide the help panel.
    HideHelp,

    /// Show an informational status message.
    ShowStatus(String),

    /// Show an error status message.
    ShowError(String),

    /// Clear the status message.
    ClearStatus,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// Tick (periodic update).
    Tick,

    /// No operation (used for event handling that doesn't produce an action).
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None | Self::Tick)
    }

    /// Returns `true` if this is a navigation action.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::Navigate(_) | Self::NavigateBack | Self::NavigateForward | Self::SubmitGoto
        )
    }

    /// Returns `true` if this action switches the UI mode.
    #[must_use]
    pub const fn is_mode_change(&self) -> bool {
        matches!(
            self,
            Self::EnterGotoMode
                | Self::ExitGotoMode
                | Self::EnterEditMode
                | Self::ExitEditMode
                | Self::ToggleHelp
                | Self::HideHelp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_needs_render() {
        assert!(Action::Navigate("/json".to_owned()).needs_render());
        assert!(Action::ToggleHelp.needs_render());
        assert!(!Action::None.needs_render());
        assert!(!Action::Tick.needs_render());
    }

    #[test]
    fn test_action_is_navigation() {
        assert!(Action::Navigate("/".to_owned()).is_navigation());
        assert!(Action::NavigateBack.is_navigation());
        assert!(Action::NavigateForward.is_navigation());
        assert!(Action::SubmitGoto.is_navigation());

        assert!(!Action::Quit.is_navigation());
        assert!(!Action::ToggleDarkMode.is_navigation());
    }

    #[test]
    fn test_action_is_mode_change() {
        assert!(Action::EnterGotoMode.is_mode_change());
        assert!(Action::EnterEditMode.is_mode_change());
        assert!(Action::ToggleHelp.is_mode_change());

        assert!(!Action::Navigate("/".to_owned()).is_mode_change());
        assert!(!Action::Quit.is_mode_change());
    }

    #[test]
    fn test_action_default() {
        assert_eq!(Action::default(), Action::None);
    }
}
