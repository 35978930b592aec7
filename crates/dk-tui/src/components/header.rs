//! Header bar component.
//!
//! Displays the application title, the active route, and the color scheme.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Longest path rendered before truncation kicks in.
const MAX_PATH_WIDTH: usize = 40;

/// The header bar component.
///
/// Displays:
/// - Application title
/// - Active page title and route path
/// - Color scheme indicator
/// - Help indicator
pub struct HeaderBar<'a> {
    /// Title of the active page.
    page_title: &'a str,
    /// Path at the history cursor.
    path: Option<&'a str>,
    /// Current dark-mode flag.
    dark_mode: bool,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HeaderBar<'a> {
    /// Creates a new header bar.
    #[must_use]
    pub const fn new(
        page_title: &'a str,
        path: Option<&'a str>,
        dark_mode: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            page_title,
            path,
            dark_mode,
            theme,
        }
    }
}

impl Widget for &HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let path_display = truncate_path(self.path.unwrap_or("-"), MAX_PATH_WIDTH);
        let scheme = if self.dark_mode { "dark" } else { "light" };

        let line = Line::from(vec![
            Span::styled("devkit", self.theme.header_style),
            Span::raw(" │ "),
            Span::styled(self.page_title, Style::default().fg(self.theme.fg)),
            Span::raw(" "),
            Span::styled(path_display, self.theme.dimmed_style()),
            Span::raw(" │ "),
            Span::styled(scheme, self.theme.accent_style()),
            Span::raw(" │ "),
            Span::styled("? for help", self.theme.dimmed_style()),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(self.theme.border_style);

        let paragraph = Paragraph::new(line).block(block);
        paragraph.render(area, buf);
    }
}

/// Truncates a path to at most `max_width` display columns, keeping the tail.
fn truncate_path(path: &str, max_width: usize) -> String {
    if path.width() <= max_width {
        return path.to_owned();
    }

    let mut tail = String::new();
    let budget = max_width.saturating_sub(1); // Room for the ellipsis
    for c in path.chars().rev() {
        let candidate = format!("{c}{tail}");
        if candidate.width() > budget {
            break;
        }
        tail = candidate;
    }
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_untouched() {
        assert_eq!(truncate_path("/json", 40), "/json");
    }

    #[test]
    fn test_long_path_keeps_tail() {
        let long = "/a/very/long/path/that/overflows/the/header/width";
        let truncated = truncate_path(long, 20);
        assert!(truncated.starts_with('…'));
        assert!(truncated.ends_with("width"));
        assert!(truncated.width() <= 20);
    }

    #[test]
    fn test_header_bar_new() {
        let theme = Theme::dark();
        let header = HeaderBar::new("Home", Some("/"), true, &theme);
        assert_eq!(header.page_title, "Home");
        assert_eq!(header.path, Some("/"));
    }
}
