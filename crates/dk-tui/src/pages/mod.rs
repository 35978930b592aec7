//! Routed page components.
//!
//! Pages are the units the router activates. They satisfy a mount contract
//! only — the [`Page`] trait — and keep their internals (buffers, selected
//! algorithm, parse errors) to themselves. The shell owns one instance of
//! each page; the router binds paths to [`PageKind`] keys that the shell
//! maps back to those instances.
//!
//! # Pages
//!
//! - [`HomePage`] (`/`) - landing view listing the available tools
//! - [`JsonFormatterPage`] (`/json`) - pretty-print and minify JSON
//! - [`HashCalculatorPage`] (`/hash`) - hex digests over typed input

use crossterm::event::KeyEvent;
use dk_nav::Route;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::action::Action;
use crate::theme::Theme;

mod hash_calculator;
mod home;
mod json_formatter;

pub use hash_calculator::HashCalculatorPage;
pub use home::HomePage;
pub use json_formatter::JsonFormatterPage;

/// Key identifying a page component.
///
/// This is the component type the router carries: a copyable key into the
/// shell's owned page objects rather than a reference to the page itself,
/// so the router never borrows the things it activates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// The landing page.
    Home,

    /// The JSON formatter tool.
    JsonFormatter,

    /// The hash calculator tool.
    HashCalculator,
}

impl PageKind {
    /// Returns the display title for this page.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::JsonFormatter => "JSON Formatter",
            Self::HashCalculator => "Hash Calculator",
        }
    }
}

/// The mount contract between the shell and a page.
///
/// A page renders itself into the area the shell hands it and turns key
/// events into [`Action`]s. Normal-mode keys not claimed by the shell's
/// global key map arrive via [`handle_key`](Page::handle_key); while the
/// page's input has focus, keystrokes arrive via
/// [`handle_edit_key`](Page::handle_edit_key) instead.
pub trait Page {
    /// Renders the page into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Handles a normal-mode key and returns the resulting action.
    fn handle_key(&mut self, key: KeyEvent) -> Action;

    /// Handles a key while the page's input has focus.
    ///
    /// The shell claims Esc to leave edit mode before this is called.
    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        let _ = key;
        Action::None
    }

    /// Notifies the page that input focus was granted or taken away.
    fn on_edit_changed(&mut self, editing: bool) {
        let _ = editing;
    }
}

/// Builds the application route table.
///
/// Paths and names are unique; [`Router::new`](dk_nav::Router::new)
/// enforces this at startup.
#[must_use]
pub fn route_table() -> Vec<Route<PageKind>> {
    vec![
        Route::new("/", "home", PageKind::Home),
        Route::new("/json", "json-formatter", PageKind::JsonFormatter),
        Route::new("/hash", "hash-calculator", PageKind::HashCalculator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use dk_nav::Router;

    #[test]
    fn test_route_table_is_valid() {
        let router = Router::new(route_table()).unwrap();
        assert_eq!(router.len(), 3);
    }

    #[test]
    fn test_route_table_bindings() {
        let router = Router::new(route_table()).unwrap();
        assert_eq!(router.resolve("/").unwrap(), &PageKind::Home);
        assert_eq!(router.resolve("/json").unwrap(), &PageKind::JsonFormatter);
        assert_eq!(router.resolve("/hash").unwrap(), &PageKind::HashCalculator);
    }

    #[test]
    fn test_page_kind_titles() {
        assert_eq!(PageKind::Home.title(), "Home");
        assert_eq!(PageKind::JsonFormatter.title(), "JSON Formatter");
        assert_eq!(PageKind::HashCalculator.title(), "Hash Calculator");
    }
}
