pub mod error;
pub mod learner;
pub mod random;
pub mod score_table;
pub mod session;

use cube_core::{Board, Move};

/// Core trait for move choosers.
pub trait Agent {
    /// Picks one of `legal_moves` for the current board.
    /// Fails with `AgentError::NoLegalMoves` when the slice is empty.
    fn choose_move(&mut self, board: &Board, legal_moves: &[Move]) -> Result<Move, AgentError>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use error::{AgentError, PersistenceError};
pub use learner::MoveLearner;
pub use random::RandomAgent;
pub use score_table::ScoreTable;
pub use session::{play_game, play_self, GameOutcome, Session};
