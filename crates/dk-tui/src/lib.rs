//! Terminal user interface shell for devkit.
//!
//! This crate renders the three tool pages behind a path-based router and
//! wires user input to navigation, page editing, and the shared UI state
//! store. It features an async event loop with tokio, a component-based
//! chrome, and a dark/light theme driven by the state store.
//!
//! # Architecture
//!
//! ```text
//! crates/dk-tui/src/
//!   lib.rs           # Public API exports and the run() entry point
//!   app.rs           # Application state and lifecycle
//!   event.rs         # Event types (Key, Resize, Tick, Render)
//!   tui.rs           # Terminal wrapper with async event streaming
//!   action.rs        # User actions (commands from key bindings)
//!   ui.rs            # Main layout rendering orchestration
//!   theme.rs         # Dark/light color schemes
//!   error.rs         # TUI-specific error types
//!   pages/
//!     mod.rs         # Page mount contract + PageKind + route table
//!     home.rs        # Landing page
//!     json_formatter.rs
//!     hash_calculator.rs
//!   components/
//!     mod.rs         # Chrome widget exports
//!     header.rs      # HeaderBar component
//!     status_bar.rs  # StatusBar component
//!     help.rs        # HelpPanel modal overlay
//!     path_input.rs  # Goto-path input overlay
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use dk_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dk_tui::TuiError> {
//!     dk_tui::run(Config::default(), "/").await
//! }
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod action;
pub mod app;
pub mod components;
pub mod error;
pub mod event;
pub mod pages;
pub mod theme;
pub mod tui;
pub mod ui;

use dk_core::Config;
use ratatui::layout::Rect;
use tracing::{debug, info};

// Public re-exports
pub use action::Action;
pub use app::{App, AppMode, StatusMessage};
pub use error::TuiError;
pub use event::Event;
pub use pages::{route_table, Page, PageKind};
pub use theme::Theme;
pub use tui::Tui;

/// Runs the TUI application with the given configuration.
///
/// This is the main entry point for the dk-tui crate. It:
///
/// 1. Builds the application state (route table validation and the initial
///    navigation happen here, before the terminal is touched)
/// 2. Initializes the terminal
/// 3. Runs the main event loop
/// 4. Cleans up on exit
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `initial_path` - The route to open first (usually `/`)
///
/// # Errors
///
/// Returns an error if:
/// - The route table is invalid (duplicate path or name)
/// - `initial_path` does not resolve
/// - Terminal initialization fails
pub async fn run(config: Config, initial_path: &str) -> Result<(), TuiError> {
    // Fail fast on configuration defects before entering the terminal
    let mut app = App::new(config, initial_path)?;

    // tick_rate_ms and frame_rate are small UI timing values, precision loss is acceptable
    #[allow(clippy::cast_precision_loss)]
    let tick_rate = 1000.0 / app.config.tui.tick_rate_ms.max(1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let frame_rate = app.config.tui.frame_rate.max(1) as f64;

    let mut tui = Tui::new(tick_rate)?.with_frame_rate(frame_rate);

    // Enter terminal
    tui.enter()?;

    // Main event loop
    info!("Entering main event loop");
    let result = run_event_loop(&mut tui, &mut app).await;

    // Exit terminal (restore state)
    tui.exit()?;

    result
}

/// Runs the main event loop.
async fn run_event_loop(tui: &mut Tui, app: &mut App) -> Result<(), TuiError> {
    loop {
        // Draw the UI
        tui.draw(|frame| ui::render(app, frame))?;

        // Wait for next event
        let Some(event) = tui.next_event().await else {
            return Err(TuiError::ChannelClosed);
        };

        // Process event
        let action = match event {
            Event::Key(key) => app.handle_key(key),
            Event::Resize { width, height } => {
                app.set_terminal_size(Rect::new(0, 0, width, height));
                Action::Render
            }
            Event::Tick => {
                app.tick();
                Action::None
            }
            Event::Render => Action::Render,
            Event::FocusGained | Event::FocusLost => Action::None,
        };

        // Apply action
        app.update(action);

        // Check for quit
        if app.should_quit {
            info!("Quit requested");
            break;
        }
    }

    debug!("Event loop finished");
    Ok(())
}
