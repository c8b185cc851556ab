use crate::types::{Coord, Move};
use thiserror::Error;

/// Errors raised by the rules engine and move notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Attempted to move from an empty cell.
    #[error("no piece at {0}")]
    EmptySource(Coord),
    /// A move outside the legal set for the side to move.
    #[error("illegal move {0}")]
    IllegalMove(Move),
    #[error("coordinate ({0}, {1}, {2}) is outside the cube")]
    OutOfBounds(i64, i64, i64),
    #[error("invalid move identifier: {0}")]
    InvalidIdentifier(String),
    #[error("invalid move input: {0}")]
    InvalidInput(String),
}
