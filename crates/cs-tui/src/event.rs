//! Event types for the TUI.
//!
//! Events are produced by the terminal event loop in [`crate::tui`] and
//! consumed by the application's main loop. Key presses drive the menus,
//! ticks drive status-message expiry.

use crossterm::event::KeyEvent;

/// An event delivered to the application's main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),

    /// The terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Periodic tick for time-based updates.
    Tick,

    /// The terminal gained focus.
    FocusGained,

    /// The terminal lost focus.
    FocusLost,
}

impl Event {
    /// Returns `true` if this is a key event.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Returns `true` if this is a tick event.
    #[must_use]
    pub const fn is_tick(&self) -> bool {
        matches!(self, Self::Tick)
    }

    /// Returns the inner key event, if this is a key event.
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
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(Event::Key(key).is_key());
        assert!(!Event::Tick.is_key());
    }

    #[test]
    fn test_event_is_tick() {
        assert!(Event::Tick.is_tick());
        assert!(!Event::FocusGained.is_tick());
    }

    #[test]
    fn test_event_as_key() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(Event::Key(key).as_key(), Some(&key));
        assert!(Event::Resize { width: 80, height: 24 }.as_key().is_none());
    }
}
