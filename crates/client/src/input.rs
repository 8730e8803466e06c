//! Keyboard-to-command mapping.
//!
//! Keeps `crossterm` key codes out of the event loop: the loop only sees
//! [`KeyAction`].
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Move(Direction),
    /// ESC: explicit confirmation to leave a zone that asks for one.
    Confirm,
    None,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Confirm,
            KeyCode::Char('h') | KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Char('j') | KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Char('k') | KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Char('l') | KeyCode::Right => KeyAction::Move(Direction::Right),
            _ => KeyAction::None,
        }
    }
}
