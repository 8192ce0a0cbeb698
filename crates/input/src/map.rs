//! Key mapping from terminal events to input signals.

use crate::types::InputSignal;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an input signal.
pub fn handle_key_event(key: KeyEvent) -> Option<InputSignal> {
    match key.code {
        KeyCode::Enter => Some(InputSignal::START),

        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(InputSignal::UP),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(InputSignal::DOWN),

        // Anything else printable travels as its raw byte.
        KeyCode::Char(c) if c.is_ascii() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputSignal(c as u8))
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
