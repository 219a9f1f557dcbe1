//! Fill zone as a searchable state space.
//!
//! Searching directly on `Board` would copy the whole grid on every move and
//! flood fill it again. Instead the board is contracted once into a graph of
//! maximal same-colored regions. That graph never changes during a search and
//! is shared by every state through an `Rc`; a state only records which regions
//! the top-left blob has absorbed so far and what color the blob currently has.

use crate::engine::Board;
use crate::state::State;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Recolor the top-left blob with the given color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FillAction(pub u8);

impl FillAction {
    pub fn color(self) -> u8 {
        self.0
    }
}

impl fmt::Display for FillAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Adjacency graph of the maximal same-colored regions of a board.
///
/// Regions are numbered in row-major order of their first cell, so region 0 is
/// always the one containing the top-left cell.
#[derive(Debug)]
pub struct RegionGraph {
    colors: Vec<u8>,
    sizes: Vec<usize>,
    neighbors: Vec<Vec<usize>>,
    cell_region: Vec<Vec<usize>>,
}

impl RegionGraph {
    /// Contracts `board` into its region graph.
    pub fn from_board(board: &Board) -> Self {
        let groups = board.find_all_groups();
        let mut cell_region = vec![vec![0; board.cols()]; board.rows()];
        for (id, group) in groups.iter().enumerate() {
            for &(r, c) in group {
                cell_region[r][c] = id;
            }
        }

        let mut neighbors = vec![Vec::new(); groups.len()];
        for (id, group) in groups.iter().enumerate() {
            for &(r, c) in group {
                for (nr, nc) in board.neighbors(r, c) {
                    let other = cell_region[nr][nc];
                    if other != id {
                        neighbors[id].push(other);
                    }
                }
            }
            neighbors[id].sort_unstable();
            neighbors[id].dedup();
        }

        RegionGraph {
            colors: groups.iter().map(|g| board.get_color(g[0].0, g[0].1)).collect(),
            sizes: groups.iter().map(Vec::len).collect(),
            neighbors,
            cell_region,
        }
    }

    pub fn region_count(&self) -> usize {
        self.colors.len()
    }

    pub fn color(&self, region: usize) -> u8 {
        self.colors[region]
    }

    /// Number of cells in `region`.
    pub fn size(&self, region: usize) -> usize {
        self.sizes[region]
    }

    /// Regions sharing an edge with `region`, ascending.
    pub fn neighbors(&self, region: usize) -> &[usize] {
        &self.neighbors[region]
    }

    /// The region the cell at `(r, c)` belongs to.
    pub fn region_of(&self, r: usize, c: usize) -> usize {
        self.cell_region[r][c]
    }
}

/// A fill-zone position: the shared region graph, the set of regions merged
/// into the top-left blob, and the blob's color.
///
/// Equality and hashing look only at the blob color and the absorbed set, so
/// two states reached through different move orders compare equal.
#[derive(Clone, Debug)]
pub struct FillZoneState {
    graph: Rc<RegionGraph>,
    color: u8,
    absorbed: Vec<u64>,
    remaining: usize,
}

impl FillZoneState {
    /// Builds the initial state of `board`: the blob is the top-left region.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::fill_zone::FillZoneState;
    /// use puzzle_search::state::State;
    /// use puzzle_search::utils::board_from_str_array;
    ///
    /// let board = board_from_str_array(&["011", "221"]).unwrap();
    /// let state = FillZoneState::from_board(&board);
    /// assert_eq!(state.remaining_regions(), 2);
    /// assert!(!state.is_solution());
    /// ```
    pub fn from_board(board: &Board) -> Self {
        let graph = Rc::new(RegionGraph::from_board(board));
        let mut state = FillZoneState {
            color: graph.color(0),
            absorbed: vec![0; graph.region_count().div_ceil(64)],
            remaining: graph.region_count(),
            graph,
        };
        state.absorb(0);
        state
    }

    pub fn graph(&self) -> &RegionGraph {
        &self.graph
    }

    /// Current color of the blob.
    pub fn color(&self) -> u8 {
        self.color
    }

    pub fn is_absorbed(&self, region: usize) -> bool {
        self.absorbed[region / 64] & (1u64 << (region % 64)) != 0
    }

    fn absorb(&mut self, region: usize) {
        self.absorbed[region / 64] |= 1u64 << (region % 64);
        self.remaining -= 1;
    }

    /// Regions not yet merged into the blob.
    pub fn remaining_regions(&self) -> usize {
        self.remaining
    }

    /// Regions outside the blob that touch it, ascending.
    pub fn boundary_regions(&self) -> Vec<usize> {
        let mut boundary: Vec<usize> = (0..self.graph.region_count())
            .filter(|&r| self.is_absorbed(r))
            .flat_map(|r| self.graph.neighbors(r).iter().copied())
            .filter(|&n| !self.is_absorbed(n))
            .collect();
        boundary.sort_unstable();
        boundary.dedup();
        boundary
    }
}

impl PartialEq for FillZoneState {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color && self.absorbed == other.absorbed
    }
}

impl Eq for FillZoneState {}

impl Hash for FillZoneState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
        self.absorbed.hash(state);
    }
}

impl State for FillZoneState {
    type Action = FillAction;

    fn is_solution(&self) -> bool {
        self.remaining == 0
    }

    /// Distinct colors of the regions touching the blob, ascending.
    fn possible_actions(&self) -> Vec<FillAction> {
        let mut colors: Vec<u8> = self
            .boundary_regions()
            .into_iter()
            .map(|r| self.graph.color(r))
            .filter(|&c| c != self.color)
            .collect();
        colors.sort_unstable();
        colors.dedup();
        colors.into_iter().map(FillAction).collect()
    }

    /// Recolors the blob and merges every region of that color it now touches.
    fn apply(&self, action: &FillAction) -> Self {
        let mut next = self.clone();
        next.color = action.color();

        let mut queue: VecDeque<usize> = self.boundary_regions().into();
        while let Some(region) = queue.pop_front() {
            if next.is_absorbed(region) || self.graph.color(region) != next.color {
                continue;
            }
            next.absorb(region);
            queue.extend(self.graph.neighbors(region).iter().copied());
        }
        next
    }
}
