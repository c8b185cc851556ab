use crate::render::board_to_string;
use cube_agents::{AgentError, MoveLearner, Session};
use cube_core::{parse_move_input, move_to_identifier, BoardError, Color, GameResult};
use rand::Rng;
use std::io::{BufRead, Write};

/// Console game: a human plays White against the learner.
pub struct InteractiveGame<'a, R> {
    session: Session,
    learner: &'a mut MoveLearner<R>,
}

impl<'a, R: Rng> InteractiveGame<'a, R> {
    pub fn new(learner: &'a mut MoveLearner<R>) -> Self {
        Self {
            session: Session::new(),
            learner,
        }
    }

    /// Runs until a King falls or the human leaves.
    ///
    /// Returns the result of a finished game after crediting the learner.
    /// `quit` or end of input abandons the game and records nothing.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        input: &mut I,
        out: &mut O,
    ) -> anyhow::Result<Option<GameResult>> {
        while !self.session.is_over() {
            write!(out, "{}", board_to_string(self.session.board()))?;

            match self.session.turn() {
                Color::White => {
                    write!(out, "Your move (x1 y1 z1 x2 y2 z2 or 'quit'): ")?;
                    out.flush()?;

                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        writeln!(out)?;
                        writeln!(out, "Game aborted")?;
                        return Ok(None);
                    }
                    if line.trim().eq_ignore_ascii_case("quit") {
                        writeln!(out, "Game aborted")?;
                        return Ok(None);
                    }

                    let mv = match parse_move_input(&line) {
                        Ok(mv) => mv,
                        Err(e) => {
                            writeln!(out, "Invalid move: {}", e)?;
                            continue;
                        }
                    };
                    match self.session.play(mv) {
                        Ok(_) => {}
                        Err(AgentError::Board(BoardError::IllegalMove(_))) => {
                            writeln!(out, "Illegal move")?;
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
                Color::Black => {
                    let moves = self.session.legal_moves();
                    let mv = self.learner.choose_move(&moves, self.session.board())?;
                    self.session.play(mv)?;
                    writeln!(out, "AI moves {}", move_to_identifier(mv))?;
                }
            }
        }

        write!(out, "{}", board_to_string(self.session.board()))?;
        let result = self.session.board().result();
        self.learner.record_result(self.session.history(), result)?;
        writeln!(out, "Game over: {}", result)?;
        Ok(Some(result))
    }
}
