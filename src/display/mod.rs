use crate::core::{Board, Cell, BOARD_SIZE};
use crossterm::style::Stylize;

/// Grid with row and column header hints, matching the console layout:
///
/// ```text
///       0   1   2
/// 0 | X |   | O |
///     ------------
/// ```
pub fn format_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("  {} ", col));
    }
    out.push('\n');

    for (row, cells) in board.cells().iter().enumerate() {
        out.push_str(&format!("{} |", row));
        for cell in cells {
            match cell {
                Cell::Occupied(symbol) => out.push_str(&format!(" {} |", symbol)),
                Cell::Empty => out.push_str("   |"),
            }
        }
        out.push('\n');
        out.push_str("    ");
        out.push_str(&"----".repeat(BOARD_SIZE));
        out.push('\n');
    }

    out
}

/// Prints the board, with an optional styled status line above it.
/// Purely presentational; the engine never reads anything back.
pub fn render_board(board: &Board, status: Option<&str>) {
    if let Some(msg) = status {
        println!("{}", msg.bold().yellow());
    }
    print!("{}", format_board(board));
}
