//! JSON run configuration for the fill-zone solver.
//!
//! ```json
//! {
//!   "logging_level": "info",
//!   "board_settings": { "type": "random", "board_size": 8, "color_count": 4, "seed": 7 },
//!   "search_settings": { "algorithm": "A*", "heuristic": "color_count" }
//! }
//! ```
//!
//! `board_settings` is either `{"type": "static", "board": [[..], ..]}` or
//! `{"type": "random", "board_size": n, "color_count": m, "seed": s}` with an
//! optional seed. `depth` and `depth_update` in `search_settings` only matter
//! for `iddfs`; `depth_update` is `{"increment": n}` or `"double"`.

use crate::engine::Board;
use crate::error::{Error, Result};
use crate::heuristics::FillZoneHeuristic;
use crate::solver::{Algorithm, AlgorithmKind, DepthSchedule, DepthUpdate};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

fn default_logging_level() -> String {
    "warn".to_string()
}

fn default_depth() -> u32 {
    1
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_logging_level")]
    pub logging_level: String,
    pub board_settings: BoardSettings,
    pub search_settings: SearchSettings,
}

impl Config {
    /// Reads and parses a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    /// `Error::Config` for malformed JSON, missing fields, an unknown board type
    /// or a depth update that does not grow the bound.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        if config.search_settings.depth_update == DepthUpdateSetting::Increment(0) {
            return Err(Error::Config(serde_json::Error::custom(
                "depth_update increment must be at least 1",
            )));
        }
        Ok(config)
    }
}

/// Where the board comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardSettings {
    /// A board written out in the configuration.
    Static { board: Vec<Vec<u8>> },
    /// A square random board. Without a seed a fresh one is drawn and logged.
    Random {
        board_size: usize,
        color_count: u8,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl BoardSettings {
    /// Builds the board these settings describe.
    pub fn generate(&self) -> Result<Board> {
        match self {
            BoardSettings::Static { board } => Board::new(board.clone()),
            BoardSettings::Random {
                board_size,
                color_count,
                seed,
            } => {
                let seed = seed.unwrap_or_else(rand::random);
                info!(seed, board_size, color_count, "generating random board");
                Board::new_random_with_seed(*board_size, *board_size, *color_count, seed)
            }
        }
    }
}

/// How the iterative-deepening bound grows between passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthUpdateSetting {
    Increment(u32),
    Double,
}

impl Default for DepthUpdateSetting {
    fn default() -> Self {
        DepthUpdateSetting::Increment(1)
    }
}

impl From<DepthUpdateSetting> for DepthUpdate {
    fn from(setting: DepthUpdateSetting) -> Self {
        match setting {
            DepthUpdateSetting::Increment(n) => DepthUpdate::Increment(n),
            DepthUpdateSetting::Double => DepthUpdate::Double,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub algorithm: String,
    #[serde(default)]
    pub heuristic: Option<String>,
    #[serde(default = "default_depth")]
    pub depth: u32,
    #[serde(default)]
    pub depth_update: DepthUpdateSetting,
}

impl SearchSettings {
    pub fn schedule(&self) -> DepthSchedule {
        DepthSchedule::new(self.depth, self.depth_update.into())
    }

    /// The configured strategy.
    ///
    /// # Errors
    /// `Error::UnknownAlgorithm` if the name is not one of the supported ones.
    pub fn algorithm(&self) -> Result<Algorithm> {
        let kind: AlgorithmKind = self.algorithm.parse()?;
        Ok(Algorithm::from_kind(kind, self.schedule()))
    }

    /// The configured heuristic; missing or unknown names give the zero heuristic.
    pub fn heuristic(&self) -> FillZoneHeuristic {
        FillZoneHeuristic::from_name(self.heuristic.as_deref())
    }
}
