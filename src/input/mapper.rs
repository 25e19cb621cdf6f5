use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

/// Stateless translation from key events to game commands.
///
/// Only the mapping lives here; whether a command is legal in the current
/// game state is the session's call.
pub struct InputMapper;

impl InputMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a command, or `None` for unbound keys
    pub fn map_key(&self, key: KeyEvent) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Quit);
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Command::Move(Direction::Up)),
            KeyCode::Down => Some(Command::Move(Direction::Down)),
            KeyCode::Left => Some(Command::Move(Direction::Left)),
            KeyCode::Right => Some(Command::Move(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Move(Direction::Up)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Move(Direction::Down)),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Move(Direction::Left)),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Move(Direction::Right)),

            // Controls
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

            _ => None,
        }
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}
