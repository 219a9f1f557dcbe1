//! # Puzzle Search Library
//!
//! A generic state-space search engine and two puzzles that plug into it.
//!
//! A puzzle implements the `State` contract (legal actions and a pure
//! transition function) and optionally a `Heuristic`. The engine explores the
//! space with breadth-first, depth-first, greedy best-first, A* or
//! iterative-deepening search, all driven by one shared loop, and reports the
//! solution path, its cost, how many nodes were expanded and how large the
//! frontier was.
//!
//! It is used by four binaries:
//! - `fill_zone_solver`: Solves a fill-zone board given by flags or a JSON config.
//! - `eight_puzzle_solver`: Solves an 8-puzzle layout.
//! - `strategy_evaluator`: Compares every strategy/heuristic pair over random boards.
//! - `human_player`: Interactive fill-zone game with undo and A* hints.
//!
//! ## Modules
//! - `state`: The `State` and `Heuristic` traits, and `ZeroHeuristic`.
//! - `tree`: The search-tree arena (`SearchTree`, `SearchNode`, `NodeId`).
//! - `frontier`: The exploration-order strategies (`Frontier` and its implementations).
//! - `solver`: The search loop, iterative deepening, `Algorithm` and `SearchResult`.
//! - `engine`: The fill-zone `Board` and `FillZoneGame`.
//! - `fill_zone`: The fill-zone board contracted into a searchable region graph.
//! - `heuristics`: Fill-zone heuristics.
//! - `eight_puzzle`: The 8-puzzle state and its heuristics.
//! - `utils`: Parsing boards and puzzles from strings.
//! - `config`: JSON run configuration.
//! - `error`: The crate's `Error` and `Result` types.

pub mod config;
pub mod eight_puzzle;
pub mod engine;
pub mod error;
pub mod fill_zone;
pub mod frontier;
pub mod heuristics;
pub mod solver;
pub mod state;
pub mod tree;
pub mod utils;

pub use error::{Error, Result};
