use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::core::action::Action;
use crate::core::board::Side;
use crate::core::round::Step;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Char(char),
    Escape,
    ForceQuit, // Ctrl+C
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Char(c)) => Some(TuiEvent::Char(c)),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Keyboard layout of the game. Letters are case-insensitive.
///
/// | Key   | Action               |
/// |-------|----------------------|
/// | A / D | red selector ← / →   |
/// | J / L | blue selector ← / →  |
/// | R     | lock and mix         |
/// | Space | new reference now    |
/// | Q/Esc | quit                 |
pub fn action_for(event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Char(c) => match c.to_ascii_lowercase() {
            'a' => Some(Action::Move(Side::Red, Step::Left)),
            'd' => Some(Action::Move(Side::Red, Step::Right)),
            'j' => Some(Action::Move(Side::Blue, Step::Left)),
            'l' => Some(Action::Move(Side::Blue, Step::Right)),
            'r' => Some(Action::Lock),
            ' ' => Some(Action::Restart),
            'q' => Some(Action::Quit),
            _ => None,
        },
        TuiEvent::Escape | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_case_insensitive() {
        for (lower, upper) in [('a', 'A'), ('d', 'D'), ('j', 'J'), ('l', 'L'), ('r', 'R')] {
            assert_eq!(
                action_for(&TuiEvent::Char(lower)),
                action_for(&TuiEvent::Char(upper))
            );
            assert!(action_for(&TuiEvent::Char(lower)).is_some());
        }
    }

    #[test]
    fn test_key_map() {
        assert_eq!(
            action_for(&TuiEvent::Char('a')),
            Some(Action::Move(Side::Red, Step::Left))
        );
        assert_eq!(
            action_for(&TuiEvent::Char('L')),
            Some(Action::Move(Side::Blue, Step::Right))
        );
        assert_eq!(action_for(&TuiEvent::Char('r')), Some(Action::Lock));
        assert_eq!(action_for(&TuiEvent::Char(' ')), Some(Action::Restart));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(&TuiEvent::Char('Q')), Some(Action::Quit));
        assert_eq!(action_for(&TuiEvent::Escape), Some(Action::Quit));
        assert_eq!(action_for(&TuiEvent::ForceQuit), Some(Action::Quit));
    }

    #[test]
    fn test_unmapped_events() {
        assert_eq!(action_for(&TuiEvent::Char('x')), None);
        assert_eq!(action_for(&TuiEvent::Char('1')), None);
        assert_eq!(action_for(&TuiEvent::Resize), None);
    }
}
