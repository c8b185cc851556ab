use crate::board::Board;
use crate::types::{Color, Coord, Move, PieceKind};

/// All 26 King steps: the 3x3x3 neighbourhood minus the origin.
const KING_STEPS: [(i8, i8, i8); 26] = king_steps();

const fn king_steps() -> [(i8, i8, i8); 26] {
    let mut steps = [(0, 0, 0); 26];
    let mut i = 0;
    let mut dx = -1;
    while dx <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dz = -1;
            while dz <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    steps[i] = (dx, dy, dz);
                    i += 1;
                }
                dz += 1;
            }
            dy += 1;
        }
        dx += 1;
    }
    steps
}

/// Generates every legal move for `color`.
///
/// Moves come out grouped by piece in board iteration order, then in
/// direction-generation order. Callers must not depend on positions in the
/// list; test membership instead. An empty result means the side is stuck;
/// the engine has no stalemate concept.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for (from, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::King => generate_king_moves(board, from, color, &mut moves),
            PieceKind::Pawn => generate_pawn_moves(board, from, color, &mut moves),
        }
    }

    moves
}

/// Returns true if `mv` is among the legal moves for `color`.
pub fn is_legal(board: &Board, color: Color, mv: Move) -> bool {
    legal_moves(board, color).contains(&mv)
}

/// King: one step in any of 26 directions onto an empty or enemy cell.
fn generate_king_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Move>) {
    for &(dx, dy, dz) in KING_STEPS.iter() {
        if let Some(to) = from.offset(dx, dy, dz) {
            if board.is_empty(to) || board.is_enemy(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

/// Pawn: forward push, diagonal captures along x, and climbing between z layers.
fn generate_pawn_moves(board: &Board, from: Coord, color: Color, moves: &mut Vec<Move>) {
    let direction = color.pawn_direction();

    // Single push
    if let Some(to) = from.offset(0, direction, 0) {
        if board.is_empty(to) {
            moves.push(Move::new(from, to));
        }
    }

    // Captures
    for dx in [-1, 1] {
        if let Some(to) = from.offset(dx, direction, 0) {
            if board.is_enemy(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }

    // Climbing
    for dz in [-1, 1] {
        if let Some(to) = from.offset(0, 0, dz) {
            if board.is_empty(to) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;
    use std::collections::HashSet;

    fn c(x: u8, y: u8, z: u8) -> Coord {
        Coord::new(x, y, z).unwrap()
    }

    fn destinations(moves: &[Move]) -> HashSet<Coord> {
        moves.iter().map(|m| m.to).collect()
    }

    #[test]
    fn test_king_steps_are_distinct_neighbours() {
        let set: HashSet<_> = KING_STEPS.iter().copied().collect();
        assert_eq!(set.len(), 26);
        assert!(!set.contains(&(0, 0, 0)));
    }

    #[test]
    fn test_lone_king_moves_match_in_bounds_neighbours() {
        for origin in Coord::all() {
            let mut board = Board::empty();
            board.set_piece(origin, Some(Piece::new(PieceKind::King, Color::White)));

            let moves = legal_moves(&board, Color::White);
            let expected: HashSet<Coord> = KING_STEPS
                .iter()
                .filter_map(|&(dx, dy, dz)| origin.offset(dx, dy, dz))
                .collect();

            assert_eq!(moves.len(), expected.len(), "king at {}", origin);
            assert_eq!(destinations(&moves), expected, "king at {}", origin);
            assert!(moves.iter().all(|m| m.from == origin));
        }
    }

    #[test]
    fn test_corner_and_centre_king_counts() {
        let mut board = Board::empty();
        board.set_piece(c(0, 0, 0), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(legal_moves(&board, Color::Black).len(), 7);

        let mut board = Board::empty();
        board.set_piece(c(1, 1, 1), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(legal_moves(&board, Color::Black).len(), 26);
    }

    #[test]
    fn test_king_captures_but_not_own_pieces() {
        let mut board = Board::empty();
        board.set_piece(c(1, 1, 1), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece(c(2, 2, 2), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(c(0, 0, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let targets = destinations(&legal_moves(&board, Color::White));
        assert!(!targets.contains(&c(2, 2, 2)));
        assert!(targets.contains(&c(0, 0, 0)));
    }

    #[test]
    fn test_white_pawn_on_empty_board() {
        let mut board = Board::empty();
        board.set_piece(c(1, 1, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));

        let moves = legal_moves(&board, Color::White);
        let expected: HashSet<Coord> = [c(1, 2, 1), c(1, 1, 0), c(1, 1, 2)].into_iter().collect();
        assert_eq!(moves.len(), 3);
        assert_eq!(destinations(&moves), expected);
    }

    #[test]
    fn test_black_pawn_advances_down() {
        let mut board = Board::empty();
        board.set_piece(c(2, 2, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let targets = destinations(&legal_moves(&board, Color::Black));
        assert!(targets.contains(&c(2, 1, 0)));
        assert!(!targets.contains(&c(2, 3, 0)));
        assert!(targets.contains(&c(2, 2, 1)));
        assert_eq!(targets.len(), 2);
    }

    #[test]
    fn test_pawn_diagonal_capture_and_blocked_push() {
        let mut board = Board::empty();
        board.set_piece(c(1, 1, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(c(1, 2, 1), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.set_piece(c(2, 2, 1), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set_piece(c(0, 2, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));

        let moves: Vec<Move> = legal_moves(&board, Color::White)
            .into_iter()
            .filter(|m| m.from == c(1, 1, 1))
            .collect();
        let targets = destinations(&moves);

        assert!(!targets.contains(&c(1, 2, 1)), "push is blocked");
        assert!(targets.contains(&c(2, 2, 1)), "captures enemy diagonally");
        assert!(!targets.contains(&c(0, 2, 1)), "never captures own piece");
        assert!(targets.contains(&c(1, 1, 0)));
        assert!(targets.contains(&c(1, 1, 2)));
    }

    #[test]
    fn test_pawn_climb_blocked_by_any_piece() {
        let mut board = Board::empty();
        board.set_piece(c(1, 1, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece(c(1, 1, 2), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let targets = destinations(&legal_moves(&board, Color::White));
        assert!(!targets.contains(&c(1, 1, 2)));
    }

    #[test]
    fn test_moves_only_from_own_pieces() {
        let board = Board::starting_position();
        for color in [Color::White, Color::Black] {
            for mv in legal_moves(&board, color) {
                let piece = board.piece_at(mv.from).expect("source occupied");
                assert_eq!(piece.color, color);
            }
        }
    }

    #[test]
    fn test_starting_position_counts() {
        let board = Board::starting_position();
        assert_eq!(legal_moves(&board, Color::White).len(), 13);
        assert_eq!(legal_moves(&board, Color::Black).len(), 13);
        assert!(is_legal(
            &board,
            Color::White,
            Move::new(c(1, 0, 0), c(1, 1, 0))
        ));
        assert!(!is_legal(
            &board,
            Color::White,
            Move::new(c(1, 0, 0), c(1, 2, 0))
        ));
    }
}
