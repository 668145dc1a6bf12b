//! Text input normalization

use crate::moves::Move;

/// What a line of user text means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A move to play this round
    Play(Move),
    /// End the session
    Quit,
    /// Not understood; the caller should prompt again
    Invalid,
}

/// Normalize free-form text into a move, a quit request, or an invalid marker.
///
/// Empty input ends the session just like an explicit `quit`. Anything else
/// is trimmed and lowercased before matching, so a line of blanks is invalid.
pub fn normalize_move(raw: &str) -> Input {
    if raw.is_empty() {
        return Input::Quit;
    }
    let s = raw.trim().to_lowercase();
    match s.as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "rock" | "r" => Input::Play(Move::Rock),
        "paper" | "p" => Input::Play(Move::Paper),
        "scissors" | "scissor" | "s" => Input::Play(Move::Scissors),
        _ => Input::Invalid,
    }
}
