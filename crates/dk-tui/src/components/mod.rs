//! UI components for the TUI.
//!
//! This module contains the chrome widgets that frame the active page.
//!
//! # Component Types
//!
//! - **Widgets** (`Widget` trait): Stateless rendering - `HeaderBar`, `StatusBar`
//! - **Overlays**: Modal overlays - `HelpPanel`, `PathInput`
//!
//! Page components live in [`crate::pages`]; they follow the `Page` mount
//! contract instead of the plain `Widget` trait.

mod header;
mod help;
mod path_input;
mod status_bar;

pub use header::HeaderBar;
pub use help::HelpPanel;
pub use path_input::PathInput;
pub use status_bar::StatusBar;
