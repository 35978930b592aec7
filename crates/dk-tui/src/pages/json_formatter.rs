//! JSON formatter page.
//!
//! An input buffer on the left, formatted output on the right. Formatting
//! and minification go through [`dk_core::format`]; parse failures are shown
//! in the output pane and never leave the page.

use crossterm::event::{KeyCode, KeyEvent};
use dk_core::FormatConfig;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::action::Action;
use crate::pages::Page;
use crate::theme::Theme;

/// What the output pane currently shows.
#[derive(Debug)]
enum Output {
    /// Nothing produced yet.
    Empty,
    /// Successful formatter output.
    Text(String),
    /// Parse failure from the last attempt.
    Error(String),
}

/// The JSON formatter page component.
#[derive(Debug)]
pub struct JsonFormatterPage {
    /// Formatter settings (indent width).
    config: FormatConfig,

    /// The input buffer being edited.
    input: String,

    /// Result of the last format/minify request.
    output: Output,

    /// Whether the input buffer has key focus.
    editing: bool,
}

impl JsonFormatterPage {
    /// Creates the page with the given formatter settings.
    #[must_use]
    pub fn new(config: FormatConfig) -> Self {
        Self {
            config,
            input: String::new(),
            output: Output::Empty,
            editing: false,
        }
    }

    /// Returns the current input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the last successful output, if any.
    #[must_use]
    pub fn output_text(&self) -> Option<&str> {
        match &self.output {
            Output::Text(text) => Some(text),
            Output::Empty | Output::Error(_) => None,
        }
    }

    /// Returns the last parse error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.output {
            Output::Error(message) => Some(message),
            Output::Empty | Output::Text(_) => None,
        }
    }

    fn format(&mut self) -> Action {
        if self.input.trim().is_empty() {
            return Action::ShowStatus("Nothing to format".to_owned());
        }
        match dk_core::format_json(&self.input, self.config.indent_width) {
            Ok(text) => {
                self.output = Output::Text(text);
                Action::ShowStatus("Formatted".to_owned())
            }
            Err(e) => {
                let message = e.to_string();
                self.output = Output::Error(message.clone());
                Action::ShowError(message)
            }
        }
    }

    fn minify(&mut self) -> Action {
        if self.input.trim().is_empty() {
            return Action::ShowStatus("Nothing to minify".to_owned());
        }
        match dk_core::minify_json(&self.input) {
            Ok(text) => {
                self.output = Output::Text(text);
                Action::ShowStatus("Minified".to_owned())
            }
            Err(e) => {
                let message = e.to_string();
                self.output = Output::Error(message.clone());
                Action::ShowError(message)
            }
        }
    }

    fn clear(&mut self) {
        self.input.clear();
        self.output = Output::Empty;
    }
}

impl Page for JsonFormatterPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let input_border = if self.editing {
            theme.focused_border_style
        } else {
            theme.border_style
        };
        let input_title = if self.editing {
            " Input (editing — Esc to finish) "
        } else {
            " Input (i to edit) "
        };

        let input_text = if self.input.is_empty() && !self.editing {
            Paragraph::new(Line::from(Span::styled(
                "Paste or type JSON, then press f to format or m to minify.",
                theme.dimmed_style(),
            )))
        } else {
            let mut display = self.input.clone();
            if self.editing {
                display.push('▌');
            }
            Paragraph::new(display).style(theme.base_style())
        };
        frame.render_widget(
            input_text
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(input_border)
                        .title(input_title),
                ),
            chunks[0],
        );

        let output = match &self.output {
            Output::Empty => Paragraph::new(Line::from(Span::styled(
                "Output appears here.",
                theme.dimmed_style(),
            ))),
            Output::Text(text) => Paragraph::new(text.as_str()).style(theme.base_style()),
            Output::Error(message) => {
                Paragraph::new(message.as_str()).style(theme.error_style())
            }
        };
        frame.render_widget(
            output.wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style)
                    .title(" Output "),
            ),
            chunks[1],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('i' | 'e') => Action::EnterEditMode,
            KeyCode::Char('f') | KeyCode::Enter => self.format(),
            KeyCode::Char('m') => self.minify(),
            KeyCode::Char('c') => {
                self.clear();
                Action::ShowStatus("Cleared".to_owned())
            }
            _ => Action::None,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                Action::Render
            }
            KeyCode::Enter => {
                self.input.push('\n');
                Action::Render
            }
            KeyCode::Backspace => {
                self.input.pop();
                Action::Render
            }
            KeyCode::Tab => {
                self.input.push_str("  ");
                Action::Render
            }
            _ => Action::None,
        }
    }

    fn on_edit_changed(&mut self, editing: bool) {
        self.editing = editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn page_with_input(input: &str) -> JsonFormatterPage {
        let mut page = JsonFormatterPage::new(FormatConfig::default());
        page.on_edit_changed(true);
        for c in input.chars() {
            page.handle_edit_key(key(KeyCode::Char(c)));
        }
        page.on_edit_changed(false);
        page
    }

    #[test]
    fn test_edit_keys_build_input() {
        let mut page = JsonFormatterPage::new(FormatConfig::default());
        page.handle_edit_key(key(KeyCode::Char('{')));
        page.handle_edit_key(key(KeyCode::Enter));
        page.handle_edit_key(key(KeyCode::Char('}')));
        assert_eq!(page.input(), "{\n}");

        page.handle_edit_key(key(KeyCode::Backspace));
        assert_eq!(page.input(), "{\n");
    }

    #[test]
    fn test_format_valid_input() {
        let mut page = page_with_input(r#"{"a":1}"#);
        let action = page.handle_key(key(KeyCode::Char('f')));
        assert_eq!(action, Action::ShowStatus("Formatted".to_owned()));
        assert_eq!(page.output_text(), Some("{\n  \"a\": 1\n}"));
        assert!(page.error().is_none());
    }

    #[test]
    fn test_format_invalid_input_stays_on_page() {
        let mut page = page_with_input("{broken");
        let action = page.handle_key(key(KeyCode::Char('f')));
        assert!(matches!(action, Action::ShowError(_)));
        assert!(page.error().is_some());
        assert!(page.output_text().is_none());
    }

    #[test]
    fn test_minify() {
        let mut page = page_with_input("{ \"a\" : [ 1 , 2 ] }");
        let action = page.handle_key(key(KeyCode::Char('m')));
        assert_eq!(action, Action::ShowStatus("Minified".to_owned()));
        assert_eq!(page.output_text(), Some(r#"{"a":[1,2]}"#));
    }

    #[test]
    fn test_format_empty_input() {
        let mut page = JsonFormatterPage::new(FormatConfig::default());
        let action = page.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Action::ShowStatus("Nothing to format".to_owned()));
    }

    #[test]
    fn test_clear_resets_both_panes() {
        let mut page = page_with_input(r#"[1,2]"#);
        page.handle_key(key(KeyCode::Char('f')));
        page.handle_key(key(KeyCode::Char('c')));
        assert!(page.input().is_empty());
        assert!(page.output_text().is_none());
        assert!(page.error().is_none());
    }

    #[test]
    fn test_i_requests_edit_mode() {
        let mut page = JsonFormatterPage::new(FormatConfig::default());
        assert_eq!(page.handle_key(key(KeyCode::Char('i'))), Action::EnterEditMode);
    }
}
