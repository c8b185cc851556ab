use cube_core::BoardError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures loading or saving the score table. Always fatal to the caller.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read score table {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score table {} is corrupt: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode score table: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write score table {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AgentError {
    /// The side to move has nothing to play.
    #[error("no legal moves")]
    NoLegalMoves,
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Board(#[from] BoardError),
}
