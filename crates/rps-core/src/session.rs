//! Game session: score, high scores and the opponent, owned in one place
//!
//! Both front ends drive a [`Session`]. It holds everything that changes while
//! playing and writes the ledger through the injected [`LedgerStore`].

use crate::input::Input;
use crate::ledger::{HighScores, LedgerStore};
use crate::moves::{Move, Outcome, determine_winner};
use crate::rng::GameRng;
use crate::score::Scoreboard;

/// One resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(player: Move, computer: Move) -> Self {
        Self {
            player,
            computer,
            outcome: determine_winner(player, computer),
        }
    }

    /// The move that won the round, if any
    pub fn winning_move(&self) -> Option<Move> {
        match self.outcome {
            Outcome::Player => Some(self.player),
            Outcome::Computer => Some(self.computer),
            Outcome::Tie => None,
        }
    }
}

/// Result of feeding one input to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResult {
    /// A round was played
    Played(Round),
    /// Input was not understood; nothing changed
    Invalid,
    /// The player asked to stop
    Quit,
}

/// Session state
pub struct Session<S: LedgerStore> {
    score: Scoreboard,
    high_scores: HighScores,
    rng: GameRng,
    store: S,
    last_round: Option<Round>,
}

impl<S: LedgerStore> Session<S> {
    /// Start a session, loading the ledger from `store`
    pub fn new(mut store: S, rng: GameRng) -> Self {
        let high_scores = HighScores::from_entries(store.load());
        log::debug!(
            "session started: seed={} high_scores={:?}",
            rng.seed(),
            high_scores.entries()
        );
        Self {
            score: Scoreboard::new(),
            high_scores,
            rng,
            store,
            last_round: None,
        }
    }

    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.last_round.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Handle normalized user input
    pub fn handle(&mut self, input: Input) -> SessionResult {
        match input {
            Input::Play(m) => SessionResult::Played(self.play(m)),
            Input::Invalid => SessionResult::Invalid,
            Input::Quit => {
                self.quit();
                SessionResult::Quit
            }
        }
    }

    /// Play a round against a randomly chosen computer move
    pub fn play(&mut self, player: Move) -> Round {
        let computer = self.rng.random_move();
        self.play_against(player, computer)
    }

    /// Play a round against a known computer move
    pub fn play_against(&mut self, player: Move, computer: Move) -> Round {
        let round = Round::new(player, computer);
        self.score.record(round.outcome);
        self.last_round = Some(round);
        log::debug!(
            "round {}: {} vs {} -> {}",
            self.score.rounds,
            player,
            computer,
            round.outcome
        );
        round
    }

    /// Retire the current score into the ledger, then zero the scoreboard.
    ///
    /// Returns true if the ledger gained an entry.
    pub fn reset(&mut self) -> bool {
        let changed = self.retire();
        self.score.reset();
        self.last_round = None;
        changed
    }

    /// Retire the current score before the session ends.
    ///
    /// Returns true if the ledger gained an entry. The scoreboard is left as
    /// is so the front end can still show the final score.
    pub fn quit(&mut self) -> bool {
        self.retire()
    }

    /// Empty the ledger and persist the empty list
    pub fn clear_high_scores(&mut self) {
        self.high_scores.clear();
        self.store.save(self.high_scores.entries());
        log::info!("high scores cleared");
    }

    fn retire(&mut self) -> bool {
        let player = self.score.player;
        let changed = self.high_scores.retire(player);
        if changed {
            log::info!("new high score: {}", player);
        }
        // Written even when unchanged, so the file always mirrors memory.
        self.store.save(self.high_scores.entries());
        changed
    }
}
