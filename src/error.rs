//! Error types for board parsing, puzzle construction and configuration loading.
//!
//! The search itself never fails: running out of frontier is reported as an
//! empty [`crate::solver::SearchResult`]. Everything here concerns building the
//! inputs of a search.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),

    #[error("Unsupported search algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
