use anyhow::Context;
use clap::Parser;
use puzzle_search::eight_puzzle::{EightPuzzleHeuristic, EightPuzzleState};
use puzzle_search::solver::{search, Algorithm, AlgorithmKind, DepthSchedule, DepthUpdate};
use puzzle_search::state::State;
use puzzle_search::utils::{puzzle_from_str, puzzle_from_str_with_goal};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve an 8-puzzle layout", long_about = None)]
struct Args {
    /// Start layout, row by row, 0 for the blank (e.g. 123405678 or 123/405/678)
    tiles: String,

    /// Goal layout, defaults to 123456780
    #[clap(short, long)]
    goal: Option<String>,

    /// Search strategy: bfs, dfs, greedy, astar or iddfs
    #[clap(short, long, default_value = "astar")]
    algorithm: String,

    /// Heuristic: zero, out_of_place or manhattan
    #[clap(long, default_value = "manhattan")]
    heuristic: String,

    /// Initial depth bound for iddfs
    #[clap(long, default_value_t = 1)]
    depth: u32,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .with_writer(std::io::stderr)
        .init();

    let start: EightPuzzleState = match &args.goal {
        Some(goal) => puzzle_from_str_with_goal(&args.tiles, goal),
        None => puzzle_from_str(&args.tiles),
    }
    .context("Invalid puzzle")?;

    let kind: AlgorithmKind = args.algorithm.parse()?;
    let algorithm = Algorithm::from_kind(kind, DepthSchedule::new(args.depth, DepthUpdate::Increment(1)));
    let heuristic: EightPuzzleHeuristic = args.heuristic.parse()?;

    println!("Start:\n{}\n", start);

    // IDDFS never returns on an unreachable goal.
    if start.is_dead() {
        println!("This layout cannot reach the goal (inversion parity differs).");
        return Ok(());
    }

    info!(algorithm = %algorithm, heuristic = %heuristic, "solving");
    let started = Instant::now();
    let result = search(&start, &heuristic, &algorithm);
    let elapsed = started.elapsed();

    if result.is_empty() {
        println!("No solution found ({} nodes expanded).", result.expanded_nodes());
        return Ok(());
    }

    let slides: Vec<String> = result.solution().iter().map(|s| s.to_string()).collect();
    println!("Solution ({} slides): {}", result.cost(), slides.join(" "));
    println!("Expanded nodes: {}", result.expanded_nodes());
    println!("Frontier nodes: {}", result.frontier_nodes());
    println!("Time: {:.3?}", elapsed);

    Ok(())
}
