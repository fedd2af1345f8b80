use crate::core::{Board, Cell, Symbol, BOARD_SIZE};

/// True iff `symbol` holds a full row, a full column, or either diagonal.
///
/// Only the symbol that just moved needs checking: under single occupancy
/// no other symbol can have completed a line this turn.
pub fn has_winning_line(board: &Board, symbol: Symbol) -> bool {
    let cells = board.cells();
    let holds = |row: usize, col: usize| cells[row][col] == Cell::Occupied(symbol);

    for i in 0..BOARD_SIZE {
        if (0..BOARD_SIZE).all(|j| holds(i, j)) {
            return true;
        }
        if (0..BOARD_SIZE).all(|j| holds(j, i)) {
            return true;
        }
    }

    (0..BOARD_SIZE).all(|i| holds(i, i)) || (0..BOARD_SIZE).all(|i| holds(i, BOARD_SIZE - 1 - i))
}
