//! Hash calculator page.
//!
//! A single-line input, an algorithm selector, and a live hex digest.
//! Digests recompute on every change through [`dk_core::digest`]; the
//! operation is total, so this page has no error states.

use crossterm::event::{KeyCode, KeyEvent};
use dk_core::{digest_hex, HashAlgorithm, HashConfig};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::action::Action;
use crate::pages::Page;
use crate::theme::Theme;

/// The hash calculator page component.
#[derive(Debug)]
pub struct HashCalculatorPage {
    /// The text being hashed.
    input: String,

    /// Currently selected algorithm.
    algorithm: HashAlgorithm,

    /// Digest of the current input, kept in sync with every change.
    digest: String,

    /// Whether the input line has key focus.
    editing: bool,
}

impl HashCalculatorPage {
    /// Creates the page with the configured default algorithm.
    #[must_use]
    pub fn new(config: HashConfig) -> Self {
        let algorithm = config.default_algorithm;
        Self {
            input: String::new(),
            algorithm,
            digest: digest_hex(algorithm, b""),
            editing: false,
        }
    }

    /// Returns the current input line.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the selected algorithm.
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Returns the digest of the current input.
    #[must_use]
    pub fn digest(&self) -> &str {
        &self.digest
    }

    fn recompute(&mut self) {
        self.digest = digest_hex(self.algorithm, self.input.as_bytes());
    }

    fn cycle_algorithm(&mut self) {
        self.algorithm = self.algorithm.next();
        self.recompute();
    }
}

impl Page for HashCalculatorPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input
                Constraint::Length(3), // Algorithm selector
                Constraint::Min(4),    // Digest
            ])
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
        let input_line = if self.input.is_empty() && !self.editing {
            Line::from(Span::styled("Type text to hash…", theme.dimmed_style()))
        } else {
            let mut spans = vec![Span::styled(self.input.clone(), theme.base_style())];
            if self.editing {
                spans.push(Span::styled("▌", theme.accent_style()));
            }
            Line::from(spans)
        };
        frame.render_widget(
            Paragraph::new(input_line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(input_border)
                    .title(input_title),
            ),
            chunks[0],
        );

        let mut selector = Vec::new();
        for &algorithm in HashAlgorithm::ALL {
            let style = if algorithm == self.algorithm {
                theme.highlight_style
            } else {
                theme.dimmed_style()
            };
            selector.push(Span::styled(format!(" {} ", algorithm.label()), style));
            selector.push(Span::raw(" "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(selector)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style)
                    .title(" Algorithm (a to cycle) "),
            ),
            chunks[1],
        );

        let digest_title = format!(
            " {} digest — {} bytes ",
            self.algorithm.label(),
            self.algorithm.output_len()
        );
        frame.render_widget(
            Paragraph::new(self.digest.as_str())
                .style(theme.success_style())
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme.border_style)
                        .title(digest_title),
                ),
            chunks[2],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('i' | 'e') => Action::EnterEditMode,
            KeyCode::Char('a') | KeyCode::Tab => {
                self.cycle_algorithm();
                Action::Render
            }
            KeyCode::Char('c') => {
                self.input.clear();
                self.recompute();
                Action::ShowStatus("Cleared".to_owned())
            }
            _ => Action::None,
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.recompute();
                Action::Render
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.recompute();
                Action::Render
            }
            // A single-line input: Enter just hands focus back
            KeyCode::Enter => Action::ExitEditMode,
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

    #[test]
    fn test_digest_is_live() {
        let mut page = HashCalculatorPage::new(HashConfig::default());
        // SHA-256 of the empty string
        assert_eq!(
            page.digest(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );

        for c in "abc".chars() {
            page.handle_edit_key(key(KeyCode::Char(c)));
        }
        assert_eq!(
            page.digest(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_backspace_recomputes() {
        let mut page = HashCalculatorPage::new(HashConfig::default());
        for c in "abcd".chars() {
            page.handle_edit_key(key(KeyCode::Char(c)));
        }
        page.handle_edit_key(key(KeyCode::Backspace));
        assert_eq!(page.input(), "abc");
        assert_eq!(
            page.digest(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_cycle_algorithm_recomputes() {
        let mut page = HashCalculatorPage::new(HashConfig::default());
        for c in "abc".chars() {
            page.handle_edit_key(key(KeyCode::Char(c)));
        }

        page.handle_key(key(KeyCode::Char('a')));
        assert_eq!(page.algorithm(), HashAlgorithm::Sha1);
        assert_eq!(page.digest(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_enter_leaves_edit_mode() {
        let mut page = HashCalculatorPage::new(HashConfig::default());
        assert_eq!(page.handle_edit_key(key(KeyCode::Enter)), Action::ExitEditMode);
    }

    #[test]
    fn test_clear() {
        let mut page = HashCalculatorPage::new(HashConfig::default());
        for c in "abc".chars() {
            page.handle_edit_key(key(KeyCode::Char(c)));
        }
        page.handle_key(key(KeyCode::Char('c')));
        assert!(page.input().is_empty());
        assert_eq!(
            page.digest(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_configured_default_algorithm() {
        let config = HashConfig {
            default_algorithm: HashAlgorithm::Sha512,
        };
        let page = HashCalculatorPage::new(config);
        assert_eq!(page.algorithm(), HashAlgorithm::Sha512);
    }
}
