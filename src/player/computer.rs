use crate::core::{Board, Position, Symbol};
use crate::player::PlayerController;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

/// Move-selection policy, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform over the currently empty cells.
    Random,
}

pub struct ComputerPlayer {
    name: String,
    symbol: Symbol,
    strategy: Strategy,
    rng: Box<dyn RngCore>,
}

impl ComputerPlayer {
    pub fn new(name: &str, symbol: Symbol, strategy: Strategy) -> Self {
        Self::with_rng(name, symbol, strategy, StdRng::from_entropy())
    }

    /// Seeded construction for deterministic play.
    pub fn with_rng(
        name: &str,
        symbol: Symbol,
        strategy: Strategy,
        rng: impl RngCore + 'static,
    ) -> Self {
        ComputerPlayer {
            name: name.to_string(),
            symbol,
            strategy,
            rng: Box::new(rng),
        }
    }

    fn random_move(&mut self, board: &mut Board) -> Option<Position> {
        let open = board.empty_positions();
        let pos = *open.choose(&mut self.rng)?;
        // pos came from the empty scan, so the mark cannot fail
        board
            .mark(pos, self.symbol)
            .expect("selected cell is empty");
        Some(pos)
    }
}

impl PlayerController for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn take_turn(&mut self, board: &mut Board) -> Option<Position> {
        match self.strategy {
            Strategy::Random => self.random_move(board),
        }
    }
}
