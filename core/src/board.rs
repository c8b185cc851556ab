//! Board state for the 4x4x4 cube.
//! Sparse placement stored in a fixed-capacity array indexed by `Coord::index()`.
use crate::error::BoardError;
use crate::types::*;

/// Fixed starting layout: two Kings and four Pawns, Black mirrored from White.
const STARTING_LAYOUT: [((u8, u8, u8), Piece); 6] = [
    ((1, 0, 0), Piece::new(PieceKind::King, Color::White)),
    ((0, 1, 0), Piece::new(PieceKind::Pawn, Color::White)),
    ((2, 1, 0), Piece::new(PieceKind::Pawn, Color::White)),
    ((1, 3, 3), Piece::new(PieceKind::King, Color::Black)),
    ((0, 2, 3), Piece::new(PieceKind::Pawn, Color::Black)),
    ((2, 2, 3), Piece::new(PieceKind::Pawn, Color::Black)),
];

/// Array-based board representation.
///
/// Iteration via [`Board::pieces`] always visits cells in ascending
/// `Coord::index()` order (x-major, then y, then z).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Creates the starting position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Clears the board and places the starting layout.
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
        for ((x, y, z), piece) in STARTING_LAYOUT {
            if let Some(coord) = Coord::new(x, y, z) {
                self.set_piece(coord, Some(piece));
            }
        }
    }

    /// Gets the piece at the given cell.
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.index()]
    }

    /// Sets or clears the piece at the given cell.
    pub fn set_piece(&mut self, coord: Coord, piece: Option<Piece>) {
        self.cells[coord.index()] = piece;
    }

    /// Moves the piece at `from` to `to`, discarding anything at `to`.
    /// Returns the captured piece, if any.
    ///
    /// Legality is not checked here; callers filter through `legal_moves` first.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> Result<Option<Piece>, BoardError> {
        let piece = self.cells[from.index()]
            .take()
            .ok_or(BoardError::EmptySource(from))?;
        let captured = self.cells[to.index()].replace(piece);
        Ok(captured)
    }

    /// Returns true if the given cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Returns true if the given cell holds a piece of the opposing color.
    pub fn is_enemy(&self, coord: Coord, color: Color) -> bool {
        self.piece_at(coord)
            .map_or(false, |p| p.color == color.opponent())
    }

    /// Iterates over occupied cells in ascending index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| Some((Coord::from_index(index)?, (*cell)?)))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Finds the King of the given color, if it is still on the board.
    pub fn king_coord(&self, color: Color) -> Option<Coord> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(coord, _)| coord)
    }

    /// True once either King has been captured.
    pub fn is_game_over(&self) -> bool {
        self.king_coord(Color::White).is_none() || self.king_coord(Color::Black).is_none()
    }

    /// Result derived from which Kings survive.
    /// A non-terminal board reports `Draw`; callers query this only after game over.
    pub fn result(&self) -> GameResult {
        match (
            self.king_coord(Color::White).is_some(),
            self.king_coord(Color::Black).is_some(),
        ) {
            (true, false) => GameResult::WhiteWins,
            (false, true) => GameResult::BlackWins,
            _ => GameResult::Draw,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
