//! Landing page.
//!
//! Lists the available tools with their route paths and shortcut keys.
//! Selecting an entry navigates through the router like any other
//! navigation request.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::action::Action;
use crate::pages::Page;
use crate::theme::Theme;

/// A tool entry on the landing page.
struct ToolEntry {
    /// Route path the entry navigates to.
    path: &'static str,
    /// Display name.
    title: &'static str,
    /// One-line description.
    description: &'static str,
    /// Global shortcut key.
    shortcut: char,
}

/// Tools shown on the landing page, in display order.
const TOOLS: &[ToolEntry] = &[
    ToolEntry {
        path: "/json",
        title: "JSON Formatter",
        description: "Pretty-print or minify a JSON document",
        shortcut: '2',
    },
    ToolEntry {
        path: "/hash",
        title: "Hash Calculator",
        description: "SHA-256 / SHA-1 / SHA-512 hex digests",
        shortcut: '3',
    },
];

/// The landing page component.
#[derive(Debug)]
pub struct HomePage {
    /// Index of the highlighted tool entry.
    selected: usize,
}

impl HomePage {
    /// Creates the landing page.
    #[must_use]
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    /// Returns the path of the highlighted entry.
    #[must_use]
    pub fn selected_path(&self) -> &'static str {
        TOOLS[self.selected.min(TOOLS.len() - 1)].path
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % TOOLS.len();
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(TOOLS.len() - 1);
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for HomePage {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Banner
                Constraint::Min(4),    // Tool list
                Constraint::Length(1), // Hint line
            ])
            .split(area);

        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                "devkit",
                theme.accent_style().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Small tools, one terminal.",
                theme.dimmed_style(),
            )),
        ])
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme.border_style));
        frame.render_widget(banner, chunks[0]);

        let items: Vec<ListItem> = TOOLS
            .iter()
            .map(|tool| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", tool.shortcut), theme.accent_style()),
                    Span::styled(tool.title, theme.base_style()),
                    Span::styled(format!("  {}", tool.path), theme.dimmed_style()),
                    Span::styled(format!("  — {}", tool.description), theme.dimmed_style()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style)
                    .title(" Tools "),
            )
            .highlight_style(theme.highlight_style)
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, chunks[1], &mut state);

        let hint = Paragraph::new(Line::from(Span::styled(
            "j/k select · Enter open · g go to path · ? help",
            theme.dimmed_style(),
        )));
        frame.render_widget(hint, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_next();
                Action::Render
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_previous();
                Action::Render
            }
            KeyCode::Enter => Action::Navigate(self.selected_path().to_owned()),
            _ => Action::None,
        }
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
    fn test_selection_wraps() {
        let mut page = HomePage::new();
        assert_eq!(page.selected_path(), "/json");

        page.handle_key(key(KeyCode::Char('j')));
        assert_eq!(page.selected_path(), "/hash");

        page.handle_key(key(KeyCode::Char('j')));
        assert_eq!(page.selected_path(), "/json"); // Wrap to start

        page.handle_key(key(KeyCode::Char('k')));
        assert_eq!(page.selected_path(), "/hash"); // Wrap back
    }

    #[test]
    fn test_enter_navigates_to_selection() {
        let mut page = HomePage::new();
        let action = page.handle_key(key(KeyCode::Enter));
        assert_eq!(action, Action::Navigate("/json".to_owned()));
    }

    #[test]
    fn test_unclaimed_keys_are_ignored() {
        let mut page = HomePage::new();
        assert_eq!(page.handle_key(key(KeyCode::Char('x'))), Action::None);
    }
}
