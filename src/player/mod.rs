pub mod computer;
pub mod human;
pub mod input;

pub use computer::{ComputerPlayer, Strategy};
pub use human::HumanPlayer;
pub use input::{StdinInput, TextInput};

use crate::core::{Board, Position, Symbol};

/// A participant that can choose and mark one cell.
pub trait PlayerController {
    fn name(&self) -> &str;

    fn symbol(&self) -> Symbol;

    /// Marks exactly one empty cell on `board` with this player's symbol
    /// and returns its position. Returns `None` only when no empty cell
    /// exists (defensive path, unreachable under correct game sequencing).
    fn take_turn(&mut self, board: &mut Board) -> Option<Position>;
}
