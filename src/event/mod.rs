//! Event handling for the countdown display.
//!
//! Terminal input, render ticks and countdown ticks all arrive as [`Event`]s
//! on a single queue, so they are applied one at a time by the app loop.

pub mod handler;

pub use handler::EventHandler;

use std::time::Duration;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent};

/// Default interval between render ticks.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Mouse input event
    Mouse(MouseEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Regular tick event for animations
    Tick,
    /// One second of countdown elapsed, tagged with the generation of the
    /// timer that produced it
    Countdown(u64),
}

impl Event {
    /// Map a raw terminal event, dropping the ones the app has no use for.
    pub fn from_terminal(event: CrosstermEvent) -> Option<Self> {
        match event {
            // Windows reports both press and release
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn key_release_is_dropped() {
        let mut key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(
            Event::from_terminal(CrosstermEvent::Key(key)),
            Some(Event::Key(key))
        );
        key.kind = KeyEventKind::Release;
        assert_eq!(Event::from_terminal(CrosstermEvent::Key(key)), None);
    }

    #[test]
    fn resize_and_focus() {
        assert_eq!(
            Event::from_terminal(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        );
        assert_eq!(Event::from_terminal(CrosstermEvent::FocusGained), None);
    }
}
