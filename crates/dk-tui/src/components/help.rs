//! Help panel component.
//!
//! Displays a modal overlay with key bindings and help information.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table, Widget};

use crate::theme::Theme;

/// Key binding definition for the help panel.
struct KeyBinding {
    /// The key(s) to press.
    key: &'static str,
    /// Description of what the key does.
    description: &'static str,
    /// The mode(s) where this binding applies.
    mode: &'static str,
}

/// Static list of key bindings to display.
const KEY_BINDINGS: &[KeyBinding] = &[
    // Navigation
    KeyBinding {
        key: "1 / 2 / 3",
        description: "Open Home / JSON Formatter / Hash Calculator",
        mode: "Normal",
    },
    KeyBinding {
        key: "g",
        description: "Go to a route path (e.g. /json)",
        mode: "Normal",
    },
    KeyBinding {
        key: "[ / Backspace",
        description: "Back in history",
        mode: "Normal",
    },
    KeyBinding {
        key: "]",
        description: "Forward in history",
        mode: "Normal",
    },
    // Appearance
    KeyBinding {
        key: "d",
        description: "Toggle dark mode",
        mode: "Normal",
    },
    // Page input
    KeyBinding {
        key: "i / e",
        description: "Edit the page input",
        mode: "Normal",
    },
    KeyBinding {
        key: "Esc",
        description: "Leave input / close overlay",
        mode: "Edit/Goto/Help",
    },
    // Tool keys
    KeyBinding {
        key: "f / Enter",
        description: "Format JSON",
        mode: "JSON page",
    },
    KeyBinding {
        key: "m",
        description: "Minify JSON",
        mode: "JSON page",
    },
    KeyBinding {
        key: "a / Tab",
        description: "Cycle hash algorithm",
        mode: "Hash page",
    },
    KeyBinding {
        key: "c",
        description: "Clear the page input",
        mode: "Tool pages",
    },
    // Application
    KeyBinding {
        key: "?",
        description: "Toggle this help",
        mode: "Normal",
    },
    KeyBinding {
        key: "q / Ctrl-C",
        description: "Quit",
        mode: "Normal",
    },
];

/// A modal help overlay listing all key bindings.
pub struct HelpPanel<'a> {
    /// Theme for styling.
    theme: &'a Theme,
}

impl<'a> HelpPanel<'a> {
    /// Creates a new help panel.
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for &HelpPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area first for overlay effect
        Clear.render(area, buf);

        let header = Row::new([
            Cell::from(Span::styled(
                "Key",
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(
                "Action",
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            )),
            Cell::from(Span::styled(
                "Mode",
                self.theme.accent_style().add_modifier(Modifier::BOLD),
            )),
        ]);

        let rows = KEY_BINDINGS.iter().map(|binding| {
            Row::new([
                Cell::from(Span::styled(binding.key, self.theme.base_style())),
                Cell::from(Span::styled(binding.description, self.theme.base_style())),
                Cell::from(Span::styled(binding.mode, self.theme.dimmed_style())),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(16),
                Constraint::Min(30),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.focused_border_style)
                .title(Span::styled(
                    " Help (Esc to close) ",
                    self.theme.accent_style().add_modifier(Modifier::BOLD),
                )),
        );

        Widget::render(table, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_cover_core_keys() {
        let keys: Vec<&str> = KEY_BINDINGS.iter().map(|b| b.key).collect();
        assert!(keys.iter().any(|k| k.contains('g')));
        assert!(keys.iter().any(|k| k.contains('d')));
        assert!(keys.iter().any(|k| k.contains('?')));
    }
}
