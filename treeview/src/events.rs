//! Event results and terminal key translation.

use crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};

use crate::navigation::NavKey;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Translate a crossterm key event into a navigation key.
///
/// Only key presses without Ctrl or Alt count, so terminals that report
/// release and repeat events do not move the selection twice.
pub fn nav_key(event: &KeyEvent) -> Option<NavKey> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    NavKey::from_key_code(event.code)
}
