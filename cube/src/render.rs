use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use cube_core::{Board, Color, Coord, BOARD_SIZE};
use std::io::{self, Write};

/// Plain text rendering: one 4x4 grid per z layer, y growing upwards.
pub fn board_to_string(board: &Board) -> String {
    let mut out = String::new();
    for z in 0..BOARD_SIZE {
        out.push_str(&format!("z={}\n", z));
        for y in (0..BOARD_SIZE).rev() {
            out.push_str(&format!("{} ", y));
            for x in 0..BOARD_SIZE {
                let symbol = Coord::new(x, y, z)
                    .and_then(|coord| board.piece_at(coord))
                    .map_or('.', |piece| piece.symbol());
                out.push(symbol);
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("  0 1 2 3\n");
    }
    out
}

/// Same layout as [`board_to_string`] with coloured pieces.
pub fn draw_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for z in 0..BOARD_SIZE {
        out.queue(Print(format!("z={}\n", z)))?;
        for y in (0..BOARD_SIZE).rev() {
            out.queue(Print(format!("{} ", y)))?;
            for x in 0..BOARD_SIZE {
                match Coord::new(x, y, z).and_then(|coord| board.piece_at(coord)) {
                    Some(piece) => {
                        let color = match piece.color {
                            Color::White => TermColor::White,
                            Color::Black => TermColor::Magenta,
                        };
                        out.queue(SetForegroundColor(color))?;
                        out.queue(Print(format!("{} ", piece.symbol())))?;
                        out.queue(ResetColor)?;
                    }
                    None => {
                        out.queue(Print(". "))?;
                    }
                }
            }
            out.queue(Print("\n"))?;
        }
        out.queue(Print("  0 1 2 3\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_board_text() {
        let text = board_to_string(&Board::starting_position());
        let layers: Vec<&str> = text.split("z=").skip(1).collect();
        assert_eq!(layers.len(), 4);

        assert!(layers[0].contains("1 P . P . \n"));
        assert!(layers[0].contains("0 . K . . \n"));
        assert!(layers[3].contains("3 . k . . \n"));
        assert!(layers[3].contains("2 p . p . \n"));
        assert!(!layers[1].contains('K'));
    }
}
