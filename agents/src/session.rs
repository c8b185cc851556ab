use crate::{Agent, AgentError};
use cube_core::{
    legal_moves, move_to_identifier, Board, BoardError, Color, GameResult, Move, MoveId, Piece,
};
use log::{info, warn};

/// One game in progress: board, side to move and the identifiers played so far.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    turn: Color,
    history: Vec<MoveId>,
}

impl Session {
    /// Starts a game from the starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::starting_position(), Color::White)
    }

    /// Starts a game from an arbitrary board.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Session {
            board,
            turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[MoveId] {
        &self.history
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.turn)
    }

    /// Plays `mv` for the side to move after checking it is legal.
    /// Returns the captured piece, if any.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>, AgentError> {
        if !self.legal_moves().contains(&mv) {
            return Err(BoardError::IllegalMove(mv).into());
        }
        let captured = self.board.apply_move(mv.from, mv.to)?;
        self.history.push(move_to_identifier(mv));
        self.turn = self.turn.opponent();
        Ok(captured)
    }

    pub fn is_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// The result once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.is_over().then(|| self.board.result())
    }

    /// Puts the board back to the starting position and forgets the history.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Color::White;
        self.history.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// How an automated game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// A King fell. `history` is what the learner should be credited with.
    Finished {
        result: GameResult,
        history: Vec<MoveId>,
    },
    /// The ply cap was hit first. Must not be recorded.
    Abandoned { plies: usize },
}

fn run<F>(max_plies: usize, mut pick: F) -> Result<GameOutcome, AgentError>
where
    F: FnMut(Color, &Board, &[Move]) -> Result<Move, AgentError>,
{
    let mut session = Session::new();

    while !session.is_over() {
        if session.history().len() >= max_plies {
            warn!("abandoning game after {} plies", max_plies);
            return Ok(GameOutcome::Abandoned { plies: max_plies });
        }
        let moves = session.legal_moves();
        let mv = pick(session.turn(), session.board(), &moves)?;
        session.play(mv)?;
    }

    let result = session.board().result();
    info!("game over after {} plies: {}", session.history().len(), result);
    Ok(GameOutcome::Finished {
        result,
        history: session.history,
    })
}

/// Plays `white` against `black` from the starting position.
pub fn play_game(
    white: &mut dyn Agent,
    black: &mut dyn Agent,
    max_plies: usize,
) -> Result<GameOutcome, AgentError> {
    run(max_plies, |color, board, moves| match color {
        Color::White => white.choose_move(board, moves),
        Color::Black => black.choose_move(board, moves),
    })
}

/// Lets one agent play both sides.
pub fn play_self(agent: &mut dyn Agent, max_plies: usize) -> Result<GameOutcome, AgentError> {
    run(max_plies, |_, board, moves| agent.choose_move(board, moves))
}
