//! rps-core: Core game logic for Rock-Paper-Scissors
//!
//! This crate contains all game logic with no I/O dependencies.
//! Persistence is reached only through the [`LedgerStore`] trait, so every
//! rule and every state transition can be tested in memory.

mod input;
mod ledger;
mod moves;
mod rng;
mod score;
mod session;

pub use input::{Input, normalize_move};
pub use ledger::{HighScores, LedgerStore, MAX_HIGH_SCORES, MemoryStore};
pub use moves::{Move, Outcome, ParseMoveError, determine_winner};
pub use rng::GameRng;
pub use score::Scoreboard;
pub use session::{Round, Session, SessionResult};
