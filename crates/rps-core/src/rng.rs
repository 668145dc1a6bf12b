//! Random number generation for the computer opponent
//!
//! Uses a seeded ChaCha RNG so a game can be replayed from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::moves::Move;

/// Game random number generator
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Pick the computer's move, uniformly over the three shapes
    pub fn random_move(&mut self) -> Move {
        Move::ALL[self.rn2(Move::ALL.len() as u32) as usize]
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
