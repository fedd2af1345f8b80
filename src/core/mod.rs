pub mod board;
pub mod types;

pub use board::{Board, MoveError, BOARD_SIZE};
pub use types::{Cell, PlayerId, Position, Symbol};
