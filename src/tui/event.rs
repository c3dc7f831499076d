use crossterm::event::{self, Event, KeyCode};

use crate::core::action::Action;

/// Poll for an input without blocking (returns immediately).
///
/// At most one queued event is consumed per call; anything that isn't a
/// meaningful key maps to `None` and is silently dropped.
pub fn poll_action_immediate() -> Option<Action> {
    poll_action_timeout(std::time::Duration::ZERO)
}

/// Poll for an input, blocking up to `timeout`.
pub fn poll_action_timeout(timeout: std::time::Duration) -> Option<Action> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!("Key event: {:?}", key_event.code);
                match key_event.code {
                    KeyCode::Up => Some(Action::Grow),
                    KeyCode::Down => Some(Action::Shrink),
                    KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
                    _ => None,
                }
            }
            Event::Resize(cols, rows) => {
                log::debug!("Resize event: {}x{}", cols, rows);
                Some(Action::Resize)
            }
            _ => None,
        }
    } else {
        None
    }
}
