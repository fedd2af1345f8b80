use crate::core::{Board, PlayerId};
use crate::display;
use crate::logic::has_winning_line;
use crate::player::PlayerController;
use crossterm::style::Stylize;

/// Terminal states are absorbing: once reached, no further moves are
/// processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won(PlayerId),
    Draw,
}

pub struct Game {
    board: Board,
    players: [Box<dyn PlayerController>; 2],
    turn: PlayerId,
    state: GameState,
}

impl Game {
    pub fn new(player1: Box<dyn PlayerController>, player2: Box<dyn PlayerController>) -> Self {
        Game {
            board: Board::new(),
            players: [player1, player2],
            turn: PlayerId::Player1,
            state: GameState::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self, id: PlayerId) -> &dyn PlayerController {
        self.players[id.index()].as_ref()
    }

    /// Runs one turn: the current player marks a cell, then the board is
    /// evaluated in fixed order (win for the mover, then full board, then
    /// alternate). No-op once the game is over.
    ///
    /// Panics if the current player reports no available move while the
    /// game is still in progress; the loop's termination order makes that
    /// state unreachable, so hitting it is a defect.
    pub fn step(&mut self) -> GameState {
        if self.state != GameState::InProgress {
            return self.state;
        }

        let mover = self.turn;
        let player = &mut self.players[mover.index()];
        if player.take_turn(&mut self.board).is_none() {
            panic!(
                "no legal move available for {:?} in an unfinished game",
                mover
            );
        }

        // Win before draw: a full board with a completed line is a win.
        if has_winning_line(&self.board, self.players[mover.index()].symbol()) {
            self.state = GameState::Won(mover);
        } else if self.board.is_full() {
            self.state = GameState::Draw;
        } else {
            self.turn = mover.opponent();
        }
        self.state
    }

    /// Drives the game to a terminal outcome, rendering after board
    /// construction and after every completed move.
    pub fn play(&mut self) {
        display::render_board(&self.board, Some("Starting the game!"));

        while self.state == GameState::InProgress {
            let current = self.player(self.turn);
            println!(
                "{}",
                format!("{}'s turn ({})", current.name(), current.symbol())
                    .bold()
                    .yellow()
            );
            self.step();
            display::render_board(&self.board, None);
        }

        match self.state {
            GameState::Won(id) => {
                println!("{}", format!("{} wins!", self.player(id).name()).bold().green())
            }
            GameState::Draw => println!("{}", "The game is a draw!".bold()),
            GameState::InProgress => unreachable!(),
        }
    }
}
