//! Moves, outcomes and the round resolution rule

use std::str::FromStr;

use strum::{Display, EnumIter};
use thiserror::Error;

/// A hand shape thrown by either side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

/// "Left beats right" pairs. Every other unequal pair goes to the right side.
const BEATS: [(Move, Move); 3] = [
    (Move::Rock, Move::Scissors),
    (Move::Scissors, Move::Paper),
    (Move::Paper, Move::Rock),
];

impl Move {
    /// All three moves, in display order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// True if `self` defeats `other`
    pub fn beats(self, other: Move) -> bool {
        BEATS.contains(&(self, other))
    }

    /// Single-key shortcut used by the front ends
    pub const fn shortcut(&self) -> char {
        match self {
            Move::Rock => 'r',
            Move::Paper => 'p',
            Move::Scissors => 's',
        }
    }
}

/// Error returned when a string does not name a move
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a move: '{0}' (expected rock, paper or scissors)")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Strict parse: accepts only the move aliases, never quit tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "scissor" | "s" => Ok(Move::Scissors),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

/// Who took the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

/// Resolve one round between the player's move and the computer's move.
pub fn determine_winner(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::Player
    } else {
        Outcome::Computer
    }
}
