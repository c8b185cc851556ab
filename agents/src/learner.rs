use crate::error::{AgentError, PersistenceError};
use crate::score_table::ScoreTable;
use crate::Agent;
use cube_core::{move_to_identifier, Board, GameResult, Move, MoveId};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

/// Learns which moves tend to appear in won games.
///
/// Every move of a finished game is credited with +1 for a White win and -1
/// for a Black win, regardless of who played it or when. Selection is greedy
/// over those scores; when the best score is shared, the choice is uniform
/// over *all* legal moves, not just the tied ones.
pub struct MoveLearner<R = StdRng> {
    name: String,
    table: ScoreTable,
    path: PathBuf,
    rng: R,
}

impl MoveLearner<StdRng> {
    /// Loads the table at `path`, seeding randomness from the OS.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        Self::load_with_rng(path, StdRng::from_entropy())
    }

    /// Loads the table at `path` with a reproducible random source.
    pub fn load_seeded(path: impl Into<PathBuf>, seed: u64) -> Result<Self, PersistenceError> {
        Self::load_with_rng(path, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveLearner<R> {
    pub fn load_with_rng(path: impl Into<PathBuf>, rng: R) -> Result<Self, PersistenceError> {
        let path = path.into();
        let table = ScoreTable::load(&path)?;
        Ok(Self::with_table(path, table, rng))
    }

    /// Wraps an already loaded table; `path` is where updates are written.
    pub fn with_table(path: impl Into<PathBuf>, table: ScoreTable, rng: R) -> Self {
        MoveLearner {
            name: "Learner".to_string(),
            table,
            path: path.into(),
            rng,
        }
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Picks a move from `legal_moves`.
    ///
    /// The board is accepted for interface symmetry with other agents; scores
    /// depend only on the move identifier.
    pub fn choose_move(
        &mut self,
        legal_moves: &[Move],
        _board: &Board,
    ) -> Result<Move, AgentError> {
        let scored: Vec<(Move, i64)> = legal_moves
            .iter()
            .map(|&mv| (mv, self.table.get(&move_to_identifier(mv))))
            .collect();

        let best_score = scored
            .iter()
            .map(|&(_, score)| score)
            .max()
            .ok_or(AgentError::NoLegalMoves)?;
        let mut best = scored.iter().filter(|&&(_, score)| score == best_score);

        let chosen = match (best.next(), best.next()) {
            (Some(&(mv, _)), None) => mv,
            _ => *legal_moves
                .choose(&mut self.rng)
                .ok_or(AgentError::NoLegalMoves)?,
        };

        debug!(
            "learner picked {} (score {}) from {} moves",
            move_to_identifier(chosen),
            self.table.get(&move_to_identifier(chosen)),
            legal_moves.len()
        );
        Ok(chosen)
    }

    /// Credits every identifier in `history` with the game's reward and
    /// writes the whole table back. Repeated identifiers are credited once
    /// per occurrence.
    ///
    /// The in-memory table only changes once the save succeeds, so a failed
    /// call can be retried without crediting the game twice.
    pub fn record_result(
        &mut self,
        history: &[MoveId],
        result: GameResult,
    ) -> Result<(), AgentError> {
        let reward = result.reward();
        let mut updated = self.table.clone();
        for id in history {
            updated.add(id, reward);
        }
        updated.save(&self.path)?;
        self.table = updated;
        Ok(())
    }
}

impl<R: Rng> Agent for MoveLearner<R> {
    fn choose_move(&mut self, board: &Board, legal_moves: &[Move]) -> Result<Move, AgentError> {
        MoveLearner::choose_move(self, legal_moves, board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
