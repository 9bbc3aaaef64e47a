use anyhow::Result;
use clap::Parser;
use log::debug;

use std::io::{stdin, stdout, Write};

use connect4_rules::*;

mod display;
use display::display;

/// Two-player Connect 4 in the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Instead of playing, cross-check the win detection over this many random games
    #[arg(long, value_name = "GAMES")]
    self_check: Option<usize>,

    /// Seed of the first random game in a self check
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Draw the board as plain text instead of coloured discs
    #[arg(long)]
    plain: bool,
}

fn player_number(mark: Mark) -> usize {
    match mark {
        Mark::PlayerOne => 1,
        Mark::PlayerTwo => 2,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    if let Some(games) = cli.self_check {
        let report = self_check::run(games, cli.seed)?;
        println!(
            "{} games, {} positions checked: player 1 won {}, player 2 won {}, {} drawn",
            report.games,
            report.positions,
            report.player_one_wins,
            report.player_two_wins,
            report.draws
        );
        return Ok(());
    }

    let draw = |game: &Game| -> Result<()> {
        if cli.plain {
            println!("{}", game.grid().render());
            Ok(())
        } else {
            display(game.grid())
        }
    };

    let mut game = Game::new();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        draw(&game)?;

        match game.state() {
            GameState::NotStarted | GameState::InProgress => {
                let mark = game.to_move();
                print!("Player {} ({}) pick a column > ", player_number(mark), mark.glyph());
                stdout().flush()?;

                let column = match read_move(&mut stdin.lock())? {
                    MoveInput::Column(column) => column,
                    MoveInput::Malformed(text) => {
                        println!("{} is not a valid column number", text);
                        continue;
                    }
                    MoveInput::Closed => {
                        println!("\nClosing...");
                        break;
                    }
                };

                if let Err(err) = game.play_checked(column) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::Won {
                winner,
                orientation,
                length,
            } => {
                debug!("winning line: {:?} of length {}", orientation, length);
                println!("Player {} wins!", player_number(winner));
                break;
            }
            GameState::Drawn => {
                println!("Draw!");
                break;
            }
        }
    }
    debug!("moves played: {:?}", game.moves());
    Ok(())
}
