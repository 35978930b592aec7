//! Application state and lifecycle management.
//!
//! This module provides the core [`App`] struct which manages the entire
//! shell state: the router, the UI state store, the page objects, the
//! current mode, and status messages.
//!
//! # Architecture
//!
//! ```text
//! App
//!  ├── router: Router<PageKind>   # Path → page resolution + history
//!  ├── store: UiStateStore        # Dark-mode flag (observable)
//!  ├── theme: Theme               # Follows the store after every action
//!  ├── home / json / hash         # Owned page objects
//!  ├── mode: AppMode              # Normal / Editing / Goto / Help
//!  └── status: Option<StatusMessage>
//! ```

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dk_core::Config;
use dk_nav::{Router, UiStateStore};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::error::TuiError;
use crate::pages::{
    route_table, HashCalculatorPage, HomePage, JsonFormatterPage, Page, PageKind,
};
use crate::theme::Theme;

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal browsing mode.
    #[default]
    Normal,

    /// Keystrokes go to the active page's input buffer.
    Editing,

    /// Path-input overlay is displayed.
    Goto,

    /// Help panel is displayed.
    Help,
}

/// Status message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` if the message should be auto-hidden.
    ///
    /// Messages are hidden after 5 seconds.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.timestamp.elapsed().as_secs() > 5
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    /// The configuration.
    pub config: Config,

    /// Path router with navigation history.
    router: Router<PageKind>,

    /// Shared UI flag store (dark mode).
    store: UiStateStore,

    /// Current theme; rebuilt from the store after every action.
    pub theme: Theme,

    /// The landing page.
    home: HomePage,

    /// The JSON formatter page.
    json: JsonFormatterPage,

    /// The hash calculator page.
    hash: HashCalculatorPage,

    /// Current UI mode.
    pub mode: AppMode,

    /// Text typed into the goto overlay.
    pub goto_input: String,

    /// Status message to display.
    pub status: Option<StatusMessage>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Terminal size (updated on resize).
    pub terminal_size: Rect,
}

impl App {
    /// Creates the application and commits the initial navigation.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError::Routes`] if the route table is invalid and
    /// [`TuiError::Navigation`] if `initial_path` does not resolve. Both are
    /// startup failures surfaced before the terminal is entered.
    pub fn new(config: Config, initial_path: &str) -> Result<Self, TuiError> {
        let mut router = Router::new(route_table())?;
        router.navigate(initial_path)?;

        // The store always starts in its documented initial state; the
        // configured scheme is applied through the setter.
        let mut store = UiStateStore::new();
        store.set_dark_mode(config.tui.color_scheme.is_dark());
        let theme = Theme::from_dark_mode(store.is_dark_mode());

        info!(initial_path, "application state created");

        Ok(Self {
            home: HomePage::new(),
            json: JsonFormatterPage::new(config.format),
            hash: HashCalculatorPage::new(config.hash),
            config,
            router,
            store,
            theme,
            mode: AppMode::Normal,
            goto_input: String::new(),
            status: None,
            should_quit: false,
            terminal_size: Rect::default(),
        })
    }

    /// Returns the router (read-only).
    #[must_use]
    pub fn router(&self) -> &Router<PageKind> {
        &self.router
    }

    /// Returns the current dark-mode flag.
    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.store.is_dark_mode()
    }

    /// Returns the kind of the active page.
    #[must_use]
    pub fn active_page_kind(&self) -> PageKind {
        self.router.active().copied().unwrap_or(PageKind::Home)
    }

    /// Returns the active page object.
    pub fn active_page_mut(&mut self) -> &mut dyn Page {
        match self.active_page_kind() {
            PageKind::Home => &mut self.home,
            PageKind::JsonFormatter => &mut self.json,
            PageKind::HashCalculator => &mut self.hash,
        }
    }

    /// Handles a key event and returns the resulting action.
    #[must_use]
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Global quit handling
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Editing => self.handle_editing_key(key),
            AppMode::Goto => self.handle_goto_key(key),
            AppMode::Help => Self::handle_help_key(key),
        }
    }

    /// Handles a key event in normal mode.
    ///
    /// Keys not claimed by the shell go to the active page.
    fn handle_normal_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('d') => Action::ToggleDarkMode,
            KeyCode::Char('g') => Action::EnterGotoMode,
            KeyCode::Char('1') => Action::Navigate("/".to_owned()),
            KeyCode::Char('2') => Action::Navigate("/json".to_owned()),
            KeyCode::Char('3') => Action::Navigate("/hash".to_owned()),
            KeyCode::Char('[') | KeyCode::Backspace => Action::NavigateBack,
            KeyCode::Char(']') => Action::NavigateForward,
            _ => self.active_page_mut().handle_key(key),
        }
    }

    /// Handles a key event while a page input has focus.
    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ExitEditMode,
            _ => self.active_page_mut().handle_edit_key(key),
        }
    }

    /// Handles a key event in the goto overlay.
    fn handle_goto_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ExitGotoMode,
            KeyCode::Enter => Action::SubmitGoto,
            KeyCode::Backspace => {
                self.goto_input.pop();
                Action::Render
            }
            KeyCode::Char(c) => {
                self.goto_input.push(c);
                Action::Render
            }
            _ => Action::None,
        }
    }

    /// Handles a key event in help mode.
    fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Action::HideHelp,
            _ => Action::None,
        }
    }

    /// Updates the application state based on an action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Navigate(path) => self.navigate(&path),
            Action::NavigateBack => {
                if self.router.back().is_none() {
                    self.status = Some(StatusMessage::info("Already at the oldest entry"));
                }
            }
            Action::NavigateForward => {
                if self.router.forward().is_none() {
                    self.status = Some(StatusMessage::info("Already at the newest entry"));
                }
            }

            Action::ToggleDarkMode => {
                let dark = self.store.toggle_dark_mode();
                self.theme = Theme::from_dark_mode(dark);
                let label = if dark { "Dark mode" } else { "Light mode" };
                self.status = Some(StatusMessage::info(label));
            }

            Action::EnterGotoMode => {
                self.goto_input.clear();
                self.mode = AppMode::Goto;
            }
            Action::ExitGotoMode => {
                self.mode = AppMode::Normal;
            }
            Action::SubmitGoto => {
                let path = std::mem::take(&mut self.goto_input);
                self.mode = AppMode::Normal;
                self.navigate(path.trim());
            }

            Action::EnterEditMode => self.set_editing(true),
            Action::ExitEditMode => self.set_editing(false),

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::HideHelp => {
                self.mode = AppMode::Normal;
            }

            Action::ShowStatus(text) => {
                self.status = Some(StatusMessage::info(text));
            }
            Action::ShowError(text) => {
                self.status = Some(StatusMessage::error(text));
            }
            Action::ClearStatus => {
                self.status = None;
            }

            Action::Render | Action::Tick | Action::None => {}
        }
    }

    /// Handles a tick event (periodic update).
    pub fn tick(&mut self) {
        // Clear stale status messages
        if let Some(ref status) = self.status {
            if status.should_hide() {
                self.status = None;
            }
        }
    }

    /// Updates the terminal size.
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    /// Requests a transition to `path`, reporting failures in the status bar.
    fn navigate(&mut self, path: &str) {
        match self.router.navigate(path) {
            Ok(&kind) => {
                debug!(path, page = kind.title(), "navigated");
                // Landing on another page always ends input focus
                self.set_editing(false);
                self.mode = AppMode::Normal;
            }
            Err(e) => {
                warn!(path, "navigation rejected");
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    /// Grants or revokes input focus on the active page.
    fn set_editing(&mut self, editing: bool) {
        self.mode = if editing {
            AppMode::Editing
        } else {
            AppMode::Normal
        };
        self.active_page_mut().on_edit_changed(editing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dk_core::ColorScheme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::new(Config::default(), "/").unwrap()
    }

    #[test]
    fn test_app_starts_on_initial_route() {
        let app = test_app();
        assert_eq!(app.active_page_kind(), PageKind::Home);
        assert_eq!(app.router().current_path(), Some("/"));
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_app_rejects_unknown_initial_route() {
        let result = App::new(Config::default(), "/nope");
        assert!(matches!(result.unwrap_err(), TuiError::Navigation(_)));
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut app = test_app();

        let action = app.handle_key(key(KeyCode::Char('2')));
        app.update(action);
        assert_eq!(app.active_page_kind(), PageKind::JsonFormatter);

        let action = app.handle_key(key(KeyCode::Char('3')));
        app.update(action);
        assert_eq!(app.active_page_kind(), PageKind::HashCalculator);
    }

    #[test]
    fn test_back_restores_previous_page() {
        let mut app = test_app();
        app.update(Action::Navigate("/hash".to_owned()));
        app.update(Action::Navigate("/json".to_owned()));

        app.update(Action::NavigateBack);
        assert_eq!(app.active_page_kind(), PageKind::HashCalculator);
        assert_eq!(app.router().current_path(), Some("/hash"));
    }

    #[test]
    fn test_back_at_edge_sets_status() {
        let mut app = test_app();
        app.update(Action::NavigateBack);
        assert_eq!(app.active_page_kind(), PageKind::Home);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_navigate_to_unknown_path_reports_error() {
        let mut app = test_app();
        app.update(Action::Navigate("/unknown".to_owned()));

        assert_eq!(app.active_page_kind(), PageKind::Home);
        let status = app.status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("/unknown"));
    }

    #[test]
    fn test_dark_mode_toggle_switches_theme() {
        let mut app = test_app();
        // Auto scheme resolves to dark
        assert!(app.is_dark_mode());
        assert_eq!(app.theme, Theme::dark());

        app.update(Action::ToggleDarkMode);
        assert!(!app.is_dark_mode());
        assert_eq!(app.theme, Theme::light());

        app.update(Action::ToggleDarkMode);
        assert!(app.is_dark_mode());
        assert_eq!(app.theme, Theme::dark());
    }

    #[test]
    fn test_light_scheme_starts_light() {
        let mut config = Config::default();
        config.tui.color_scheme = ColorScheme::Light;
        let app = App::new(config, "/").unwrap();
        assert!(!app.is_dark_mode());
        assert_eq!(app.theme, Theme::light());
    }

    #[test]
    fn test_goto_mode_round_trip() {
        let mut app = test_app();

        let action = app.handle_key(key(KeyCode::Char('g')));
        app.update(action);
        assert_eq!(app.mode, AppMode::Goto);

        for c in "/json".chars() {
            let action = app.handle_key(key(KeyCode::Char(c)));
            app.update(action);
        }
        assert_eq!(app.goto_input, "/json");

        let action = app.handle_key(key(KeyCode::Enter));
        app.update(action);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.active_page_kind(), PageKind::JsonFormatter);
    }

    #[test]
    fn test_goto_unknown_path_keeps_current_page() {
        let mut app = test_app();
        app.update(Action::EnterGotoMode);
        for c in "/typo".chars() {
            let action = app.handle_key(key(KeyCode::Char(c)));
            app.update(action);
        }
        app.update(Action::SubmitGoto);

        assert_eq!(app.active_page_kind(), PageKind::Home);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_goto_escape_cancels() {
        let mut app = test_app();
        app.update(Action::EnterGotoMode);
        let action = app.handle_key(key(KeyCode::Esc));
        app.update(action);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_edit_mode_routes_keys_to_page() {
        let mut app = test_app();
        app.update(Action::Navigate("/hash".to_owned()));

        let action = app.handle_key(key(KeyCode::Char('i')));
        app.update(action);
        assert_eq!(app.mode, AppMode::Editing);

        for c in "abc".chars() {
            let action = app.handle_key(key(KeyCode::Char(c)));
            app.update(action);
        }

        let action = app.handle_key(key(KeyCode::Esc));
        app.update(action);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = test_app();
        app.update(Action::ToggleHelp);
        assert_eq!(app.mode, AppMode::Help);

        let action = app.handle_key(key(KeyCode::Esc));
        app.update(action);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Action::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Action::Quit);
    }

    #[test]
    fn test_status_message_expiry() {
        let mut app = test_app();
        app.update(Action::ShowStatus("saved".to_owned()));
        assert!(app.status.is_some());

        // Fresh messages survive a tick
        app.tick();
        assert!(app.status.is_some());

        app.update(Action::ClearStatus);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_full_navigation_scenario() {
        let mut app = test_app();

        app.update(Action::Navigate("/hash".to_owned()));
        app.update(Action::Navigate("/json".to_owned()));
        app.update(Action::NavigateBack);

        assert_eq!(app.router().current_path(), Some("/hash"));
        assert_eq!(app.active_page_kind(), PageKind::HashCalculator);

        app.update(Action::NavigateForward);
        assert_eq!(app.active_page_kind(), PageKind::JsonFormatter);
    }
}
