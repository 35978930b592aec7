//! Theme and styling for the TUI.
//!
//! This module provides the [`Theme`] struct for managing colors and styles
//! throughout the terminal interface. It supports both dark and light color
//! schemes; the active scheme follows the dark-mode flag in the
//! [`UiStateStore`](dk_nav::UiStateStore).
//!
//! # Example
//!
//! ```
//! use dk_tui::Theme;
//!
//! let theme = Theme::from_dark_mode(true);
//! assert_eq!(theme, Theme::dark());
//! ```

use dk_core::ColorScheme;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
///
/// Contains all colors and styles used throughout the interface.
/// Use [`Theme::dark()`] or [`Theme::light()`] to get predefined themes,
/// [`Theme::from_scheme()`] to honor a configuration value, or
/// [`Theme::from_dark_mode()`] to follow the UI state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Primary background color.
    pub bg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Error/warning color.
    pub error_fg: Color,

    /// Success/confirmation color.
    pub success_fg: Color,

    // =========================================================================
    // Selection Colors
    // =========================================================================
    /// Background color for selected items.
    pub selected_bg: Color,

    /// Foreground color for selected items.
    pub selected_fg: Color,

    // =========================================================================
    // Border Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for focused borders.
    pub focused_border_style: Style,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for highlighted/selected items.
    pub highlight_style: Style,

    /// Style for the header bar.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    ///
    /// This is the default theme, optimized for dark terminal backgrounds.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            // Base colors
            fg: Color::Rgb(220, 220, 220),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255), // Soft blue
            error_fg: Color::Rgb(255, 80, 80),
            success_fg: Color::Rgb(100, 255, 100),

            // Selection colors
            selected_bg: Color::Rgb(60, 60, 80),
            selected_fg: Color::White,

            // Border styles
            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),

            // Component styles
            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    ///
    /// Optimized for light terminal backgrounds.
    #[must_use]
    pub fn light() -> Self {
        Self {
            // Base colors
            fg: Color::Rgb(30, 30, 30),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200), // Dark blue
            error_fg: Color::Rgb(180, 50, 50),
            success_fg: Color::Rgb(50, 150, 50),

            // Selection colors
            selected_bg: Color::Rgb(200, 200, 220),
            selected_fg: Color::Black,

            // Border styles
            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),

            // Component styles
            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// If the scheme is [`ColorScheme::Auto`], defaults to dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        Self::from_dark_mode(scheme.is_dark())
    }

    /// Creates a theme from the dark-mode flag of the UI state store.
    #[must_use]
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }

    /// Returns a style for success text.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
