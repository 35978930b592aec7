//! Event types for the TUI event loop.
//!
//! This module provides the [`Event`] enum representing all events
//! that can be processed by the TUI application.
//!
//! # Event Sources
//!
//! Events originate from two sources:
//!
//! - **Terminal**: Key presses, window resizing, focus changes
//! - **Timer**: Periodic tick events plus render-frame signals
//!
//! # Example
//!
//! ```ignore
//! use dk_tui::Event;
//!
//! loop {
//!     match tui.next_event().await {
//!         Some(Event::Key(key)) => handle_key(key),
//!         Some(Event::Tick) => expire_status_messages(),
//!         Some(Event::Render) => draw_frame(),
//!         None => break,
//!     }
//! }
//! ```

use crossterm::event::KeyEvent;

/// Events that can be processed by the TUI.
///
/// This enum unifies all event sources into a single type that can be
/// processed by the application's main event loop.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Periodic tick for timed updates (status message expiry).
    ///
    /// The tick rate is configured via `TuiConfig::tick_rate_ms`.
    Tick,

    /// Signal to render a new frame.
    ///
    /// This is separate from Tick to allow different rates for
    /// UI updates vs timed state changes.
    Render,

    /// Focus gained by the terminal window.
    FocusGained,

    /// Focus lost by the terminal window.
    FocusLost,
}

impl Event {
    /// Returns `true` if this is a key event.
    #[inline]
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns `true` if this is a tick event.
    #[inline]
    #[must_use]
    pub const fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }

    /// Returns `true` if this is a render event.
    #[inline]
    #[must_use]
    pub const fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Returns the key event if this is a Key variant.
    #[inline]
    #[must_use]
    pub const fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_event_is_key() {
        let key_event = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(key_event.is_key());

        let tick_event = Event::Tick;
        assert!(!tick_event.is_key());
    }

    #[test]
    fn test_event_is_tick() {
        let tick = Event::Tick;
        assert!(tick.is_tick());

        let render = Event::Render;
        assert!(!render.is_tick());
        assert!(render.is_render());
    }

    #[test]
    fn test_event_as_key() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let event = Event::Key(key);
        assert!(event.as_key().is_some());
        assert_eq!(event.as_key().map(|k| k.code), Some(KeyCode::Enter));

        let tick = Event::Tick;
        assert!(tick.as_key().is_none());
    }

    #[test]
    fn test_resize_event() {
        let event = Event::Resize {
            width: 120,
            height: 40,
        };
        if let Event::Resize { width, height } = event {
            assert_eq!(width, 120);
            assert_eq!(height, 40);
        } else {
            panic!("Expected Resize event");
        }
    }
}
