pub mod core;
pub mod display;
pub mod game;
pub mod logic;
pub mod player;


pub use crate::core::{Board, Cell, MoveError, PlayerId, Position, Symbol};
pub use crate::game::{Game, GameState};
pub use crate::player::{ComputerPlayer, HumanPlayer, PlayerController, Strategy};
