pub mod board;
pub mod error;
pub mod move_gen;
pub mod notation;
pub mod perft;
pub mod types;

pub use board::*;
pub use error::BoardError;
pub use move_gen::*;
pub use notation::{format_move_input, move_to_identifier, parse_move_input, MoveId};
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
