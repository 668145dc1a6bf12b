//! Running score for a session

use crate::moves::Outcome;

/// Wins for each side plus the number of rounds played
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub player: u32,
    pub computer: u32,
    pub rounds: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolved round. Ties only advance the round counter.
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds = self.rounds.saturating_add(1);
        match outcome {
            Outcome::Player => self.player = self.player.saturating_add(1),
            Outcome::Computer => self.computer = self.computer.saturating_add(1),
            Outcome::Tie => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Player and computer wins as a pair
    pub fn pair(&self) -> (u32, u32) {
        (self.player, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero() {
        assert_eq!(Scoreboard::new().pair(), (0, 0));
        assert_eq!(Scoreboard::new().rounds, 0);
    }

    #[test]
    fn test_record() {
        let mut score = Scoreboard::new();
        score.record(Outcome::Player);
        assert_eq!(score.pair(), (1, 0));
        score.record(Outcome::Computer);
        score.record(Outcome::Computer);
        assert_eq!(score.pair(), (1, 2));
        score.record(Outcome::Tie);
        assert_eq!(score.pair(), (1, 2));
        assert_eq!(score.rounds, 4);
    }

    #[test]
    fn test_reset() {
        let mut score = Scoreboard::new();
        score.record(Outcome::Player);
        score.record(Outcome::Tie);
        score.reset();
        assert_eq!(score, Scoreboard::default());
    }

    #[test]
    fn test_saturates() {
        let mut score = Scoreboard {
            player: u32::MAX,
            computer: 0,
            rounds: u32::MAX,
        };
        score.record(Outcome::Player);
        assert_eq!(score.player, u32::MAX);
        assert_eq!(score.rounds, u32::MAX);
    }
}
