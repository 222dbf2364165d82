use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::io::{stdout, Write};
use std::time::Duration;

use connect4_minimax::{
    board::WinState,
    game::{Control, GameConfig, GameController, Phase},
    Error, WIDTH,
};

mod terminal;

/// Play Connect 4 against a minimax engine
#[derive(Parser)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax engine")]
struct Cli {
    /// Who controls player 1 (red, moves first)
    #[arg(long, value_enum, default_value_t = Player::Human)]
    player_one: Player,

    /// Who controls player 2 (yellow)
    #[arg(long, value_enum, default_value_t = Player::Engine)]
    player_two: Player,

    /// Pause between moves in milliseconds when both players are engines
    #[arg(long, default_value_t = 3000)]
    delay_ms: u64,
}

#[derive(Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Player {
    Human,
    Engine,
}

impl From<Player> for Control {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Control::Human,
            Player::Engine => Control::Engine,
        }
    }
}

fn main() -> Result<()> {
    // logs go to stderr so they don't tear the board drawing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        player_a: cli.player_one.into(),
        player_b: cli.player_two.into(),
    };
    let engines_only = config.player_a == Control::Engine && config.player_b == Control::Engine;
    let mut game = GameController::new(config);

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        terminal::draw(game.board())?;

        match game.phase() {
            Phase::ComputingEngineMove => {
                println!("AI is thinking...");
                stdout().flush()?;

                // slow down play if both players are AI
                if engines_only {
                    std::thread::sleep(Duration::from_millis(cli.delay_ms));
                }

                let placement = game.play_engine_move()?;
                println!(
                    "{} plays column {}",
                    terminal::name(placement.piece),
                    placement.column + 1
                );
            }

            Phase::AwaitingMove => {
                print!("{} to move > ", terminal::name(game.to_move()));
                stdout().flush()?;

                let input_str = match terminal::read_line()? {
                    Some(input_str) => input_str,
                    None => break,
                };
                let column = match input_str.parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => column - 1,
                    Ok(column) => {
                        println!(
                            "Invalid move, column {} out of range. Columns must be between 1 and {}",
                            column, WIDTH
                        );
                        continue;
                    }
                    Err(_) => {
                        println!("Invalid number: {}", input_str);
                        continue;
                    }
                };

                match game.submit_move(column) {
                    Ok(_) => {}
                    Err(Error::InvalidMove { column }) => {
                        println!("Invalid move, column {} full", column + 1)
                    }
                    Err(err) => println!("{}", err),
                }
            }

            // end states
            Phase::GameOver(state) => {
                match state {
                    WinState::WinA => println!("Player 1 wins!"),
                    WinState::WinB => println!("Player 2 wins!"),
                    _ => println!("Draw!"),
                }
                if !terminal::ask("Play again? y/n: ")? {
                    break;
                }
                game.restart();
            }
        }
    }
    Ok(())
}
