use anyhow::Context;
use clap::Parser;
use puzzle_search::engine::{Board, FillZoneGame};
use puzzle_search::fill_zone::FillZoneState;
use puzzle_search::heuristics::CombinedHeuristic;
use puzzle_search::solver::{search, Algorithm};
use puzzle_search::utils::board_from_str;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play fill zone in the terminal", long_about = None)]
struct Args {
    /// Board file to play instead of a random board
    #[clap(short, long)]
    board: Option<PathBuf>,

    /// Side length of the random board
    #[clap(long, default_value_t = 8)]
    size: usize,

    /// Number of colors on the random board
    #[clap(long, default_value_t = 4)]
    colors: u8,

    /// Seed for the random board; a fresh one is drawn when omitted
    #[clap(long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn load_board(args: &Args) -> anyhow::Result<Board> {
    match &args.board {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read board file {}", path.display()))?;
            Ok(board_from_str(&text)?)
        }
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            println!("Board seed: {}", seed);
            Ok(Board::new_random_with_seed(args.size, args.size, args.colors, seed)?)
        }
    }
}

/// Best next color from the current position and the number of moves an
/// optimal game still needs.
fn hint(board: &Board) -> Option<(u8, u32)> {
    let state = FillZoneState::from_board(board);
    let result = search(&state, &CombinedHeuristic, &Algorithm::AStar);
    result.solution().first().map(|action| (action.color(), result.cost()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .with_writer(std::io::stderr)
        .init();

    let mut game = FillZoneGame::new_with_board(load_board(&args)?);
    println!("Welcome to Fill Zone! Flood the whole board from the top-left corner.");

    loop {
        println!("---------------------");
        println!("Steps: {}", game.steps());
        println!("{}", game.board().to_string_with_highlight(true));

        if game.is_game_over() {
            println!();
            println!("---------------------");
            println!("🎉 BOARD FILLED! 🎉");
            println!("Total Steps: {}", game.steps());
            println!("---------------------");
            break;
        }

        let colors: Vec<String> = game.board().colors().iter().map(|c| c.to_string()).collect();
        print!(
            "Current color {}. Enter a color ({}), 'h' for a hint, 'u' to undo, 'q' to quit: ",
            game.board().current_color(),
            colors.join("/")
        );
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            println!();
            break;
        }

        match input.trim() {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "u" => {
                if game.undo_last_move() {
                    println!("Move undone.");
                } else {
                    println!("Cannot undo further (no moves made).");
                }
            }
            "h" => match hint(game.board()) {
                Some((color, remaining)) => {
                    println!("Hint: play color {} ({} moves left with perfect play).", color, remaining)
                }
                None => println!("No hint available."),
            },
            other => match other.parse::<u8>() {
                Ok(color) => {
                    if game.process_move(color) {
                        println!("Move processed.");
                    } else {
                        println!("Invalid move: color {} is the current color or not on the board.", color);
                    }
                }
                Err(_) => println!("Invalid input: enter a color number, 'h', 'u', or 'q'."),
            },
        }
    }

    Ok(())
}
