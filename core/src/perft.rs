use crate::board::Board;
use crate::error::BoardError;
use crate::move_gen::legal_moves;
use crate::types::{Color, Move, PieceKind};

/// Perft (performance test) results at each depth.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub captures: u64,
    /// Leaf moves that take a King and end the game.
    pub king_captures: u64,
    pub climbs: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.king_captures += other.king_captures;
        self.climbs += other.climbs;
    }
}

fn child(board: &Board, mv: Move) -> Result<Board, BoardError> {
    let mut next = board.clone();
    next.apply_move(mv.from, mv.to)?;
    Ok(next)
}

/// Counts leaf nodes of the move tree, sides alternating from `color`.
/// Game-over positions are leaves.
pub fn perft(board: &Board, color: Color, depth: u8) -> Result<u64, BoardError> {
    if depth == 0 || board.is_game_over() {
        return Ok(1);
    }

    let moves = legal_moves(board, color);

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        nodes += perft(&child(board, mv)?, color.opponent(), depth - 1)?;
    }

    Ok(nodes)
}

/// Perft with a per-root-move breakdown.
pub fn perft_divide(
    board: &Board,
    color: Color,
    depth: u8,
) -> Result<Vec<(Move, u64)>, BoardError> {
    let mut results = Vec::new();

    for mv in legal_moves(board, color) {
        let nodes = if depth <= 1 {
            1
        } else {
            perft(&child(board, mv)?, color.opponent(), depth - 1)?
        };
        results.push((mv, nodes));
    }

    Ok(results)
}

/// Perft with move classification at the leaves.
pub fn perft_detailed(
    board: &Board,
    color: Color,
    depth: u8,
) -> Result<PerftResults, BoardError> {
    let mut results = PerftResults::default();

    if depth == 0 || board.is_game_over() {
        results.nodes = 1;
        return Ok(results);
    }

    for mv in legal_moves(board, color) {
        if depth == 1 {
            results.nodes += 1;

            if let Some(target) = board.piece_at(mv.to) {
                results.captures += 1;
                if target.kind == PieceKind::King {
                    results.king_captures += 1;
                }
            }

            let is_pawn = board
                .piece_at(mv.from)
                .map_or(false, |p| p.kind == PieceKind::Pawn);
            if is_pawn && mv.from.z() != mv.to.z() {
                results.climbs += 1;
            }
        } else {
            let child_results = perft_detailed(&child(board, mv)?, color.opponent(), depth - 1)?;
            results.add(&child_results);
        }
    }

    Ok(results)
}
