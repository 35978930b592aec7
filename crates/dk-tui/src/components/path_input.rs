//! Path input component.
//!
//! Displays a text input overlay for navigating to a route path.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::theme::Theme;

/// A path input overlay widget.
///
/// Displays a centered text input for entering a route path. This is shown
/// as a modal overlay while the app is in goto mode; submitting the text
/// feeds the router's `navigate`.
pub struct PathInput<'a> {
    /// The current input text.
    text: &'a str,
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> PathInput<'a> {
    /// Creates a new path input widget.
    #[must_use]
    pub const fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for &PathInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first for overlay effect
        Clear.render(area, buf);

        // Build the input content with cursor
        let input_content = if self.text.is_empty() {
            Line::from(vec![
                Span::styled(
                    "Type a route path, e.g. /json",
                    Style::default()
                        .fg(self.theme.dimmed_fg)
                        .add_modifier(Modifier::ITALIC),
                ),
                Span::styled("▌", self.theme.accent_style()),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.text, self.theme.base_style()),
                Span::styled("▌", self.theme.accent_style()),
            ])
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.focused_border_style)
            .title(Span::styled(
                " Go to (Esc to cancel, Enter to navigate) ",
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(Color::Rgb(30, 30, 40)));

        let paragraph = Paragraph::new(input_content)
            .block(block)
            .alignment(ratatui::layout::Alignment::Left);

        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_input_new() {
        let theme = Theme::dark();
        let input = PathInput::new("/json", &theme);
        assert_eq!(input.text, "/json");
    }

    #[test]
    fn test_path_input_empty() {
        let theme = Theme::dark();
        let input = PathInput::new("", &theme);
        assert!(input.text.is_empty());
    }
}
