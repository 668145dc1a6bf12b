//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rps_core::Move;

/// Something the player asked the window to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Throw a move against the computer
    Play(Move),
    /// Retire the score into the high scores and start over
    Reset,
    /// Forget all saved high scores
    ClearHighScores,
    /// Retire the score and close the window
    Quit,
}

/// Convert a key event to a command.
///
/// Move shortcuts are case-insensitive. Key releases are ignored so a
/// single keystroke never plays twice.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),           // Ctrl+C: quit
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'r' => Some(Command::Play(Move::Rock)),
            'p' => Some(Command::Play(Move::Paper)),
            's' => Some(Command::Play(Move::Scissors)),
            'n' => Some(Command::Reset),                          // n : new game
            'c' => Some(Command::ClearHighScores),
            'q' => Some(Command::Quit),
            _ => None,
        },
        KeyCode::Backspace => Some(Command::Reset),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
