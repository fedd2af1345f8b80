use tictactoe::{ComputerPlayer, Game, HumanPlayer, Strategy, Symbol};

fn main() -> anyhow::Result<()> {
    println!("=== Tic-tac-toe ===");

    let human = HumanPlayer::new("Player 1", Symbol('X'));
    let computer = ComputerPlayer::new("Computer", Symbol('O'), Strategy::Random);

    let mut game = Game::new(Box::new(human), Box::new(computer));
    game.play();

    Ok(())
}
