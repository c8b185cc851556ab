use crate::{Agent, AgentError};
use cube_core::{Board, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Plays uniformly random legal moves.
pub struct RandomAgent<R = StdRng> {
    name: String,
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomAgent {
            name: "Random".to_string(),
            rng,
        }
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn choose_move(&mut self, _board: &Board, legal_moves: &[Move]) -> Result<Move, AgentError> {
        legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(AgentError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
