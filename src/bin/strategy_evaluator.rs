use anyhow::Context;
use clap::Parser;
use puzzle_search::engine::Board;
use puzzle_search::fill_zone::FillZoneState;
use puzzle_search::heuristics::FillZoneHeuristic;
use puzzle_search::solver::{search, Algorithm, AlgorithmKind, DepthSchedule};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare search strategies on random fill-zone boards", long_about = None)]
struct Args {
    /// Number of random boards to evaluate
    #[clap(long, default_value_t = 20)]
    boards: usize,

    /// Side length of each board
    #[clap(long, default_value_t = 6)]
    size: usize,

    /// Number of colors on each board
    #[clap(long, default_value_t = 4)]
    colors: u8,

    /// Seed of the first board; board i uses start_seed + i
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Write every individual run to this file as JSON
    #[clap(long)]
    json: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "warn")]
    log_level: String,
}

/// One strategy run on one board.
#[derive(Debug, Serialize)]
struct RunRecord {
    board: usize,
    seed: u64,
    strategy: String,
    solved: bool,
    valid: bool,
    cost: u32,
    expanded_nodes: usize,
    frontier_nodes: usize,
    micros: u64,
}

#[derive(Default)]
struct Totals {
    runs: usize,
    invalid: usize,
    cost: u64,
    expanded: u64,
    frontier: u64,
    micros: u64,
}

/// Uninformed strategies run once with the zero heuristic, informed ones once
/// per real heuristic.
fn strategies() -> Vec<(String, Algorithm, FillZoneHeuristic)> {
    let mut list = Vec::new();
    for kind in AlgorithmKind::ALL {
        let algorithm = Algorithm::from_kind(kind, DepthSchedule::default());
        if kind.is_informed() {
            for heuristic in FillZoneHeuristic::ALL.into_iter().filter(|h| *h != FillZoneHeuristic::Zero) {
                list.push((format!("{} ({})", kind, heuristic), algorithm, heuristic));
            }
        } else {
            list.push((kind.to_string(), algorithm, FillZoneHeuristic::Zero));
        }
    }
    list
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)))
        .with_writer(std::io::stderr)
        .init();

    let strategies = strategies();
    let mut records = Vec::new();
    let mut totals: HashMap<String, Totals> = HashMap::new();

    println!(
        "Starting strategy evaluation for {} boards ({}x{}, {} colors)...",
        args.boards, args.size, args.size, args.colors
    );

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx as u64;
        let board = Board::new_random_with_seed(args.size, args.size, args.colors, seed)?;
        let start = FillZoneState::from_board(&board);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, seed);

        for (name, algorithm, heuristic) in &strategies {
            let started = Instant::now();
            let result = search(&start, heuristic, algorithm);
            let micros = started.elapsed().as_micros() as u64;

            let colors: Vec<u8> = result.solution().iter().map(|a| a.color()).collect();
            let valid = !result.is_empty() && board.check_solution(&colors);
            if !valid {
                error!(strategy = %name, board = board_idx, seed, "solution does not solve the board");
            }
            debug!(strategy = %name, board = board_idx, cost = result.cost(), micros, "run finished");

            println!(
                "  Strategy: {:<26} Cost: {:<4} Expanded: {:<8} Frontier: {:<8} Time: {}us",
                name,
                result.cost(),
                result.expanded_nodes(),
                result.frontier_nodes(),
                micros
            );

            let entry = totals.entry(name.clone()).or_default();
            entry.runs += 1;
            entry.invalid += usize::from(!valid);
            entry.cost += u64::from(result.cost());
            entry.expanded += result.expanded_nodes() as u64;
            entry.frontier += result.frontier_nodes() as u64;
            entry.micros += micros;

            records.push(RunRecord {
                board: board_idx,
                seed,
                strategy: name.clone(),
                solved: !result.is_empty(),
                valid,
                cost: result.cost(),
                expanded_nodes: result.expanded_nodes(),
                frontier_nodes: result.frontier_nodes(),
                micros,
            });
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");

    let mut averages: Vec<(&str, f64, f64, f64, f64, usize)> = totals
        .iter()
        .filter(|(_, t)| t.runs > 0)
        .map(|(name, t)| {
            let n = t.runs as f64;
            (
                name.as_str(),
                t.cost as f64 / n,
                t.expanded as f64 / n,
                t.frontier as f64 / n,
                t.micros as f64 / n,
                t.invalid,
            )
        })
        .collect();

    // Cheapest solutions first, fewer expansions breaking ties.
    averages.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.2.total_cmp(&b.2)));

    for (name, cost, expanded, frontier, micros, invalid) in averages {
        println!(
            "Strategy {:<26}: Cost = {:.2}, Expanded = {:.1}, Frontier = {:.1}, Time = {:.0}us{}",
            name,
            cost,
            expanded,
            frontier,
            micros,
            if invalid > 0 { format!(", {} invalid", invalid) } else { String::new() }
        );
    }

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nWrote {} runs to {}", records.len(), path.display());
    }

    Ok(())
}
