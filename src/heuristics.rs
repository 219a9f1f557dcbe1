//! Cost-to-go estimates for fill-zone states.
//!
//! Every heuristic here is admissible and consistent: one move lowers its value
//! by at most one, and a solved state scores 0. A* with any of them therefore
//! returns a minimum-length color sequence.

use crate::error::{Error, Result};
use crate::fill_zone::FillZoneState;
use crate::state::{Heuristic, ZeroHeuristic};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Counts the distinct colors among the regions not yet absorbed by the blob.
///
/// A move only absorbs regions of the chosen color, so each of these colors
/// needs at least one more move.
///
/// # Arguments
/// * `state`: The fill-zone position to analyze.
///
/// # Returns
/// The number of distinct colors outside the blob, 0 for a solved position.
pub fn count_remaining_colors(state: &FillZoneState) -> u32 {
    let graph = state.graph();
    let mut seen = 0u32;
    for region in (0..graph.region_count()).filter(|&r| !state.is_absorbed(r)) {
        seen |= 1u32 << graph.color(region);
    }
    seen.count_ones()
}

/// Graph distance from the blob to the region farthest from it.
///
/// Distances are measured in region hops by a breadth-first search seeded with
/// every absorbed region at distance 0. A move absorbs only regions at distance
/// 1, so the result drops by at most one per move.
///
/// # Returns
/// The largest distance found, 0 when every region is already absorbed.
pub fn blob_eccentricity(state: &FillZoneState) -> u32 {
    let graph = state.graph();
    let mut distance: Vec<Option<u32>> = vec![None; graph.region_count()];
    let mut queue = VecDeque::new();

    for region in (0..graph.region_count()).filter(|&r| state.is_absorbed(r)) {
        distance[region] = Some(0);
        queue.push_back(region);
    }

    let mut farthest = 0;
    while let Some(region) = queue.pop_front() {
        let next = distance[region].unwrap_or_default() + 1;
        for &neighbor in graph.neighbors(region) {
            if distance[neighbor].is_none() {
                distance[neighbor] = Some(next);
                farthest = farthest.max(next);
                queue.push_back(neighbor);
            }
        }
    }
    farthest
}

/// Number of distinct colors left outside the blob.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColorCountHeuristic;

impl Heuristic<FillZoneState> for ColorCountHeuristic {
    fn calculate(&self, state: &FillZoneState) -> u32 {
        count_remaining_colors(state)
    }
}

/// Distance from the blob to its farthest region.
#[derive(Clone, Copy, Debug, Default)]
pub struct EccentricityHeuristic;

impl Heuristic<FillZoneState> for EccentricityHeuristic {
    fn calculate(&self, state: &FillZoneState) -> u32 {
        blob_eccentricity(state)
    }
}

/// The larger of `ColorCountHeuristic` and `EccentricityHeuristic`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombinedHeuristic;

impl Heuristic<FillZoneState> for CombinedHeuristic {
    fn calculate(&self, state: &FillZoneState) -> u32 {
        count_remaining_colors(state).max(blob_eccentricity(state))
    }
}

/// Fill-zone heuristic chosen by name, as used by configuration files and the
/// command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillZoneHeuristic {
    #[default]
    Zero,
    ColorCount,
    Eccentricity,
    Combined,
}

impl FillZoneHeuristic {
    pub const ALL: [FillZoneHeuristic; 4] = [
        FillZoneHeuristic::Zero,
        FillZoneHeuristic::ColorCount,
        FillZoneHeuristic::Eccentricity,
        FillZoneHeuristic::Combined,
    ];

    /// Looks a heuristic up by name. Missing or unknown names fall back to
    /// `Zero`, which turns informed strategies into their uninformed forms.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::heuristics::FillZoneHeuristic;
    /// assert_eq!(FillZoneHeuristic::from_name(Some("dijkstra")), FillZoneHeuristic::Eccentricity);
    /// assert_eq!(FillZoneHeuristic::from_name(Some("???")), FillZoneHeuristic::Zero);
    /// assert_eq!(FillZoneHeuristic::from_name(None), FillZoneHeuristic::Zero);
    /// ```
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|n| n.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for FillZoneHeuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "zero" | "dummy" | "none" => Ok(FillZoneHeuristic::Zero),
            "color_count" | "colorcount" | "colors" => Ok(FillZoneHeuristic::ColorCount),
            "eccentricity" | "dijkstra" | "distance" => Ok(FillZoneHeuristic::Eccentricity),
            "combined" | "max" => Ok(FillZoneHeuristic::Combined),
            _ => Err(Error::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for FillZoneHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FillZoneHeuristic::Zero => "zero",
            FillZoneHeuristic::ColorCount => "color_count",
            FillZoneHeuristic::Eccentricity => "eccentricity",
            FillZoneHeuristic::Combined => "combined",
        };
        f.write_str(name)
    }
}

impl Heuristic<FillZoneState> for FillZoneHeuristic {
    fn calculate(&self, state: &FillZoneState) -> u32 {
        match self {
            FillZoneHeuristic::Zero => ZeroHeuristic.calculate(state),
            FillZoneHeuristic::ColorCount => ColorCountHeuristic.calculate(state),
            FillZoneHeuristic::Eccentricity => EccentricityHeuristic.calculate(state),
            FillZoneHeuristic::Combined => CombinedHeuristic.calculate(state),
        }
    }
}
