//! Move identifiers and human move input.
//!
//! An identifier is the six coordinate digits of a move, source then
//! destination, joined by a dash: `"100-110"`. It depends only on the move,
//! never on the board, so it can be replayed as history after a game ends.
use crate::error::BoardError;
use crate::types::{Coord, Move};
use std::fmt;
use std::str::FromStr;

/// Canonical string key for a move.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MoveId(String);

impl MoveId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the identifier back into a move.
    pub fn to_move(&self) -> Result<Move, BoardError> {
        let invalid = || BoardError::InvalidIdentifier(self.0.clone());
        let (from, to) = self.0.split_once('-').ok_or_else(invalid)?;
        Ok(Move::new(
            parse_coord_digits(from).ok_or_else(invalid)?,
            parse_coord_digits(to).ok_or_else(invalid)?,
        ))
    }
}

impl From<Move> for MoveId {
    fn from(mv: Move) -> Self {
        move_to_identifier(mv)
    }
}

impl FromStr for MoveId {
    type Err = BoardError;

    /// Accepts only well-formed identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = MoveId(s.to_string());
        id.to_move()?;
        Ok(id)
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encodes a move as its canonical identifier.
pub fn move_to_identifier(mv: Move) -> MoveId {
    MoveId(mv.to_string())
}

fn parse_coord_digits(s: &str) -> Option<Coord> {
    let digits: Vec<u8> = s
        .chars()
        .map(|ch| ch.to_digit(10).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        &[x, y, z] => Coord::new(x, y, z),
        _ => None,
    }
}

/// Formats a move the way a human enters it: `"1 0 0 1 1 0"`.
pub fn format_move_input(mv: Move) -> String {
    let (f, t) = (mv.from, mv.to);
    format!(
        "{} {} {} {} {} {}",
        f.x(),
        f.y(),
        f.z(),
        t.x(),
        t.y(),
        t.z()
    )
}

/// Parses a human move entered as six integers: `x1 y1 z1 x2 y2 z2`.
pub fn parse_move_input(text: &str) -> Result<Move, BoardError> {
    let nums = text
        .split_whitespace()
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| BoardError::InvalidInput(format!("'{}' is not an integer", part)))
        })
        .collect::<Result<Vec<i64>, _>>()?;

    if nums.len() != 6 {
        return Err(BoardError::InvalidInput(format!(
            "expected six numbers, got {}",
            nums.len()
        )));
    }

    let coord = |x: i64, y: i64, z: i64| {
        let narrow = |v: i64| i32::try_from(v).unwrap_or(i32::MAX);
        Coord::from_signed(narrow(x), narrow(y), narrow(z)).ok_or(BoardError::OutOfBounds(x, y, z))
    };

    Ok(Move::new(
        coord(nums[0], nums[1], nums[2])?,
        coord(nums[3], nums[4], nums[5])?,
    ))
}
