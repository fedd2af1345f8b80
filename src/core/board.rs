use super::types::{Cell, Position, Symbol};
use std::fmt;

/// Side length of the grid.
pub const BOARD_SIZE: usize = 3;

/// Rejected mark attempt. Recoverable for a human (re-prompt); the
/// computer never produces one because it selects from the empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    Occupied(Position),
    OutOfRange(Position),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::Occupied(pos) => write!(f, "cell {} is already occupied", pos),
            MoveError::OutOfRange(pos) => {
                write!(
                    f,
                    "position {} is outside the {}x{} board",
                    pos, BOARD_SIZE, BOARD_SIZE
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The 3x3 grid. Cells transition Empty -> Occupied exactly once;
/// `mark` is the only mutating operation.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Read-only view of the grid.
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Marks the cell at `pos` with `symbol` iff it is currently empty.
    /// Fails without mutating on an occupied or out-of-range target.
    pub fn mark(&mut self, pos: Position, symbol: Symbol) -> Result<(), MoveError> {
        if pos.row >= BOARD_SIZE || pos.col >= BOARD_SIZE {
            return Err(MoveError::OutOfRange(pos));
        }
        match self.cells[pos.row][pos.col] {
            Cell::Empty => {
                self.cells[pos.row][pos.col] = Cell::Occupied(symbol);
                Ok(())
            }
            Cell::Occupied(_) => Err(MoveError::Occupied(pos)),
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Open cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        let mut open = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    open.push(Position::new(row, col));
                }
            }
        }
        open
    }
}
