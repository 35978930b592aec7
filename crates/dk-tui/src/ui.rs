//! Main UI layout and rendering orchestration.
//!
//! This module provides the main [`render`] function that orchestrates
//! rendering of the chrome and the active page based on the current
//! application state.
//!
//! # Layout Structure
//!
//! ```text
//! +------------------------------------------------------------------+
//! | devkit │ JSON Formatter /json │ dark │ ? for help                |
//! +------------------------------------------------------------------+
//! |                                                                  |
//! |                        (active page)                             |
//! |                                                                  |
//! +------------------------------------------------------------------+
//! | NORMAL  Formatted │ ◂ 2/3 ▸                                      |
//! +------------------------------------------------------------------+
//! ```
//!
//! The goto and help overlays render centered on top of the page.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, AppMode};
use crate::components::{HeaderBar, HelpPanel, PathInput, StatusBar};
use crate::pages::Page;

/// Renders the entire UI based on the current application state.
pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    // Main vertical layout:
    // - Header (2 lines, bottom border included)
    // - Page content (flexible)
    // - Status bar (1 line)
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(8),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let theme = app.theme.clone();

    // Render header
    let header = HeaderBar::new(
        app.active_page_kind().title(),
        app.router().current_path(),
        app.is_dark_mode(),
        &theme,
    );
    frame.render_widget(&header, main_chunks[0]);

    // Render the active page
    app.active_page_mut().render(frame, main_chunks[1], &theme);

    // Render status bar
    let status_bar = StatusBar::new(app, &theme);
    frame.render_widget(&status_bar, main_chunks[2]);

    // Render path input overlay if in goto mode
    if app.mode == AppMode::Goto {
        let path_input = PathInput::new(&app.goto_input, &theme);
        let input_area = centered_input(area);
        frame.render_widget(&path_input, input_area);
    }

    // Render help panel overlay if in help mode
    if app.mode == AppMode::Help {
        let help_panel = HelpPanel::new(&theme);
        let help_area = centered_rect(70, 70, area);
        frame.render_widget(&help_panel, help_area);
    }
}

/// Creates a centered rectangle with the given percentage width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Creates the rectangle for the single-line input overlay: three rows tall
/// (content plus borders), horizontally centered at half width.
fn centered_input(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 100);
        let centered = centered_rect(50, 50, area);

        // Should be roughly centered
        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.width < area.width);
        assert!(centered.height < area.height);
    }

    #[test]
    fn test_centered_input_is_three_rows() {
        let area = Rect::new(0, 0, 100, 40);
        let input = centered_input(area);
        assert_eq!(input.height, 3);
        assert_eq!(input.width, 50);
    }
}
