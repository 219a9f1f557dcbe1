use anyhow::{bail, Context};
use clap::Parser;
use puzzle_search::config::Config;
use puzzle_search::engine::{Board, FillZoneGame};
use puzzle_search::fill_zone::FillZoneState;
use puzzle_search::heuristics::FillZoneHeuristic;
use puzzle_search::solver::{iterative_deepening, search, Algorithm, AlgorithmKind, DepthSchedule, DepthUpdate};
use puzzle_search::utils::board_from_str;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a fill-zone board with a chosen search strategy", long_about = None)]
struct Args {
    /// JSON run configuration; when given, the board and search flags are ignored
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Board file, one row of color digits per line
    #[clap(short, long)]
    board: Option<PathBuf>,

    /// Side length of the random board used when no board file is given
    #[clap(long, default_value_t = 6)]
    size: usize,

    /// Number of colors on the random board
    #[clap(long, default_value_t = 4)]
    colors: u8,

    /// Seed for the random board
    #[clap(long)]
    seed: Option<u64>,

    /// Search strategy: bfs, dfs, greedy, astar or iddfs
    #[clap(short, long, default_value = "astar")]
    algorithm: String,

    /// Heuristic: zero, color_count, eccentricity or combined
    #[clap(long)]
    heuristic: Option<String>,

    /// Initial depth bound for iddfs
    #[clap(long, default_value_t = 1)]
    depth: u32,

    /// Depth bound growth per iddfs pass
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    depth_step: u32,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "warn")]
    log_level: String,
}

struct Run {
    board: Board,
    algorithm: Algorithm,
    heuristic: FillZoneHeuristic,
}

fn run_from_args(args: &Args) -> anyhow::Result<Run> {
    let board = match &args.board {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read board file {}", path.display()))?;
            board_from_str(&text).with_context(|| format!("Invalid board in {}", path.display()))?
        }
        None => match args.seed {
            Some(seed) => Board::new_random_with_seed(args.size, args.size, args.colors, seed)?,
            None => Board::new_random(args.size, args.colors)?,
        },
    };

    let kind: AlgorithmKind = args.algorithm.parse()?;
    let schedule = DepthSchedule::new(args.depth, DepthUpdate::Increment(args.depth_step));
    Ok(Run {
        board,
        algorithm: Algorithm::from_kind(kind, schedule),
        heuristic: FillZoneHeuristic::from_name(args.heuristic.as_deref()),
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Some(
            Config::from_file(path).with_context(|| format!("Failed to load config {}", path.display()))?,
        ),
        None => None,
    };

    let level = config.as_ref().map_or(args.log_level.as_str(), |c| c.logging_level.as_str());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let run = match &config {
        Some(config) => Run {
            board: config.board_settings.generate()?,
            algorithm: config.search_settings.algorithm()?,
            heuristic: config.search_settings.heuristic(),
        },
        None => run_from_args(&args)?,
    };

    if run.algorithm.kind().is_informed() && run.heuristic == FillZoneHeuristic::Zero {
        warn!(algorithm = %run.algorithm, "informed strategy running with the zero heuristic");
    }

    println!(
        "Board ({}x{}, {} colors):\n{}\n",
        run.board.rows(),
        run.board.cols(),
        run.board.colors().len(),
        run.board.to_string_with_highlight(true)
    );
    println!("Searching with {} (heuristic: {})...\n", run.algorithm, run.heuristic);

    let start = FillZoneState::from_board(&run.board);
    let started = Instant::now();
    let result = match run.algorithm {
        Algorithm::Iddfs(schedule) => {
            let outcome = iterative_deepening(&start, &run.heuristic, schedule);
            for pass in &outcome.passes {
                println!(
                    "  depth {:<3} expanded {:<8} {}",
                    pass.depth_limit,
                    pass.expanded_nodes,
                    if pass.solved { "solved" } else { "no solution" }
                );
            }
            outcome.result
        }
        _ => search(&start, &run.heuristic, &run.algorithm),
    };
    let elapsed = started.elapsed();

    if result.is_empty() {
        println!("No solution found ({} nodes expanded).", result.expanded_nodes());
        return Ok(());
    }

    let colors: Vec<u8> = result.solution().iter().map(|a| a.color()).collect();
    println!("Solution found:\n");
    println!("Moves ({}):", result.cost());
    if colors.is_empty() {
        println!("  No moves made.");
    } else {
        for (i, color) in colors.iter().enumerate() {
            println!("  Move {}: color {}", i + 1, color);
        }
    }
    println!("Expanded nodes: {}", result.expanded_nodes());
    println!("Frontier nodes: {}", result.frontier_nodes());
    println!("Time: {:.3?}\n", elapsed);

    let mut game = FillZoneGame::new_with_board(run.board.clone());
    for &color in &colors {
        game.process_move(color);
    }
    if !game.is_game_over() || !run.board.check_solution(&colors) {
        bail!("replaying the solution did not solve the board");
    }
    println!("Final board state:\n{}\n", game.board().to_string_with_highlight(false));

    Ok(())
}
