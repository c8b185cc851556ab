use crate::error::PersistenceError;
use cube_core::MoveId;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Move identifier to accumulated score.
///
/// Absent keys read as 0. Serialized as a single JSON object, keys sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    scores: BTreeMap<String, i64>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `id`, 0 if never seen.
    pub fn get(&self, id: &MoveId) -> i64 {
        self.scores.get(id.as_str()).copied().unwrap_or(0)
    }

    /// Adds `delta` to the score of `id`, inserting it if new.
    pub fn add(&mut self, id: &MoveId, delta: i64) {
        *self.scores.entry(id.as_str().to_string()).or_insert(0) += delta;
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Loads a table from `path`.
    ///
    /// A missing file is a first run and yields an empty table. Any other
    /// read failure, or a document that does not parse, is an error.
    pub fn load(path: &Path) -> Result<Self, PersistenceError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no score table at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let table: Self = serde_json::from_str(&text).map_err(|source| PersistenceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} scores from {}", table.len(), path.display());
        Ok(table)
    }

    /// Overwrites `path` with the full table.
    pub fn save(&self, path: &Path) -> Result<(), PersistenceError> {
        let text = serde_json::to_string_pretty(self).map_err(PersistenceError::Encode)?;
        fs::write(path, text).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("saved {} scores to {}", self.len(), path.display());
        Ok(())
    }
}
