use crate::core::{Board, MoveError, Position, Symbol, BOARD_SIZE};
use crate::player::input::{StdinInput, TextInput};
use crate::player::PlayerController;
use crossterm::style::Stylize;

/// Human participant. Re-prompts until the input collaborator yields a
/// syntactically valid, in-range, empty target cell.
pub struct HumanPlayer {
    name: String,
    symbol: Symbol,
    input: Box<dyn TextInput>,
}

enum ParseError {
    Malformed,
    OutOfRange,
}

/// Validation steps (a) and (b): two comma-separated integers, both in
/// [0, 2]. Whitespace is stripped anywhere in the line, as in
/// "1 , 2" or " 0,0 ".
fn parse_position(line: &str) -> Result<Position, ParseError> {
    let cleaned: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let (row_text, col_text) = cleaned.split_once(',').ok_or(ParseError::Malformed)?;
    let row: i64 = row_text.parse().map_err(|_| ParseError::Malformed)?;
    let col: i64 = col_text.parse().map_err(|_| ParseError::Malformed)?;

    let limit = BOARD_SIZE as i64;
    if !(0..limit).contains(&row) || !(0..limit).contains(&col) {
        return Err(ParseError::OutOfRange);
    }
    Ok(Position::new(row as usize, col as usize))
}

impl HumanPlayer {
    /// Reads moves from stdin.
    pub fn new(name: &str, symbol: Symbol) -> Self {
        Self::with_input(name, symbol, Box::new(StdinInput))
    }

    pub fn with_input(name: &str, symbol: Symbol, input: Box<dyn TextInput>) -> Self {
        HumanPlayer {
            name: name.to_string(),
            symbol,
            input,
        }
    }
}

impl PlayerController for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Symbol {
        self.symbol
    }

    fn take_turn(&mut self, board: &mut Board) -> Option<Position> {
        if board.is_full() {
            return None;
        }

        let prompt = format!(
            "{} ({}), enter a position as row,col: ",
            self.name, self.symbol
        );

        loop {
            let line = match self.input.read_line(&prompt) {
                Ok(line) => line,
                Err(err) => {
                    // Out-of-model: the input stream is assumed to always
                    // eventually yield a valid line.
                    eprintln!("{}", format!("input unavailable: {}", err).red());
                    return None;
                }
            };

            let pos = match parse_position(&line) {
                Ok(pos) => pos,
                Err(ParseError::Malformed) => {
                    println!(
                        "{}",
                        "Could not read that. Use the format row,col (e.g. 0,2).".red()
                    );
                    continue;
                }
                Err(ParseError::OutOfRange) => {
                    println!(
                        "{}",
                        format!(
                            "Invalid position. Row and column must be between 0 and {}.",
                            BOARD_SIZE - 1
                        )
                        .red()
                    );
                    continue;
                }
            };

            match board.mark(pos, self.symbol) {
                Ok(()) => return Some(pos),
                Err(err @ MoveError::Occupied(_)) => {
                    println!("{}", format!("{}. Pick an empty cell.", err).red());
                }
                // parse_position already range-checked
                Err(err) => println!("{}", err.to_string().red()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use std::collections::VecDeque;
    use std::io;

    /// Canned input lines; errors once the script runs out.
    pub struct ScriptedInput {
        lines: VecDeque<String>,
    }

    impl ScriptedInput {
        pub fn new(lines: &[&str]) -> Self {
            ScriptedInput {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl TextInput for ScriptedInput {
        fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
            self.lines
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    fn human(lines: &[&str]) -> HumanPlayer {
        HumanPlayer::with_input("Tester", Symbol('X'), Box::new(ScriptedInput::new(lines)))
    }

    #[test]
    fn valid_input_marks_the_cell() {
        let mut board = Board::new();
        let pos = human(&["1,2"]).take_turn(&mut board);
        assert_eq!(pos, Some(Position::new(1, 2)));
        assert_eq!(board.cells()[1][2], Cell::Occupied(Symbol('X')));
    }

    #[test]
    fn surrounding_whitespace_is_accepted() {
        let mut board = Board::new();
        let pos = human(&["  2 , 0 "]).take_turn(&mut board);
        assert_eq!(pos, Some(Position::new(2, 0)));
    }

    #[test]
    fn malformed_lines_are_retried() {
        let mut board = Board::new();
        let pos = human(&["nope", "1-2", "1,2,3", "0,0"]).take_turn(&mut board);
        assert_eq!(pos, Some(Position::new(0, 0)));
    }

    #[test]
    fn out_of_range_then_valid() {
        // "5,5" parses but fails the range check; "1,1" succeeds.
        let mut board = Board::new();
        let pos = human(&["5,5", "1,1"]).take_turn(&mut board);
        assert_eq!(pos, Some(Position::new(1, 1)));
        assert_eq!(board.cells()[1][1], Cell::Occupied(Symbol('X')));
        assert_eq!(board.empty_positions().len(), 8);
    }

    #[test]
    fn negative_coordinates_are_out_of_range() {
        let mut board = Board::new();
        let pos = human(&["-1,0", "0,1"]).take_turn(&mut board);
        assert_eq!(pos, Some(Position::new(0, 1)));
    }

    #[test]
    fn occupied_cell_is_rejected_and_retried() {
        let mut board = Board::new();
        board.mark(Position::new(0, 0), Symbol('O')).unwrap();

        let pos = human(&["0,0", "0,1"]).take_turn(&mut board);
        assert_eq!(pos, Some(Position::new(0, 1)));
        // The rejected attempt left the occupied cell alone.
        assert_eq!(board.cells()[0][0], Cell::Occupied(Symbol('O')));
    }

    #[test]
    fn full_board_yields_none_without_reading() {
        let mut board = Board::new();
        for pos in board.empty_positions() {
            board.mark(pos, Symbol('O')).unwrap();
        }
        assert_eq!(human(&[]).take_turn(&mut board), None);
    }
}
