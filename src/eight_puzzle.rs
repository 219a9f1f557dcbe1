//! The 8-puzzle: eight numbered tiles and a blank on a 3x3 grid.
//!
//! Layouts are stored row-major in a `[u8; 9]`, with `0` standing for the blank.
//! An action slides the blank one cell in some direction, swapping it with the
//! tile that was there.

use crate::error::{Error, Result};
use crate::state::{Heuristic, State, ZeroHeuristic};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const SIDE: usize = 3;

/// The conventional goal: tiles in order, blank in the bottom-right corner.
pub const DEFAULT_GOAL: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

/// Direction the blank moves in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    pub const ALL: [Slide; 4] = [Slide::Up, Slide::Down, Slide::Left, Slide::Right];

    fn delta(self) -> (isize, isize) {
        match self {
            Slide::Up => (-1, 0),
            Slide::Down => (1, 0),
            Slide::Left => (0, -1),
            Slide::Right => (0, 1),
        }
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slide::Up => "up",
            Slide::Down => "down",
            Slide::Left => "left",
            Slide::Right => "right",
        };
        f.write_str(name)
    }
}

/// One 8-puzzle layout together with the layout it should reach.
///
/// Two states are equal when their tiles are equal; the goal is carried along
/// but does not take part in comparisons.
#[derive(Clone, Debug)]
pub struct EightPuzzleState {
    tiles: [u8; 9],
    goal: [u8; 9],
}

fn check_permutation(layout: &[u8; 9], what: &str) -> Result<()> {
    let mut seen = [false; 9];
    for &tile in layout {
        if tile > 8 || seen[tile as usize] {
            return Err(Error::InvalidPuzzle(format!(
                "{} {:?} is not a permutation of 0..=8",
                what, layout
            )));
        }
        seen[tile as usize] = true;
    }
    Ok(())
}

/// Number of tile pairs out of order, the blank ignored.
fn inversions(layout: &[u8; 9]) -> usize {
    let tiles: Vec<u8> = layout.iter().copied().filter(|&t| t != 0).collect();
    let mut count = 0;
    for i in 0..tiles.len() {
        for j in i + 1..tiles.len() {
            if tiles[i] > tiles[j] {
                count += 1;
            }
        }
    }
    count
}

impl EightPuzzleState {
    /// Creates a puzzle starting at `tiles` and aiming for `goal`.
    ///
    /// # Errors
    /// Returns `Error::InvalidPuzzle` if either layout is not a permutation of
    /// `0..=8`.
    pub fn new(tiles: [u8; 9], goal: [u8; 9]) -> Result<Self> {
        check_permutation(&tiles, "tiles")?;
        check_permutation(&goal, "goal")?;
        Ok(EightPuzzleState { tiles, goal })
    }

    pub fn tiles(&self) -> &[u8; 9] {
        &self.tiles
    }

    pub fn goal(&self) -> &[u8; 9] {
        &self.goal
    }

    pub fn is_solved(&self) -> bool {
        self.tiles == self.goal
    }

    fn blank(&self) -> usize {
        // Construction guarantees exactly one blank.
        self.tiles.iter().position(|&t| t == 0).unwrap_or_default()
    }

    fn target_of(&self, slide: Slide) -> Option<usize> {
        let blank = self.blank();
        let (dr, dc) = slide.delta();
        let r = (blank / SIDE).checked_add_signed(dr)?;
        let c = (blank % SIDE).checked_add_signed(dc)?;
        (r < SIDE && c < SIDE).then_some(r * SIDE + c)
    }
}

impl PartialEq for EightPuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for EightPuzzleState {}

impl std::hash::Hash for EightPuzzleState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl State for EightPuzzleState {
    type Action = Slide;

    fn is_solution(&self) -> bool {
        self.is_solved()
    }

    /// On a 3x3 board a slide never changes the inversion parity, so a layout
    /// whose parity differs from the goal's can never reach it.
    fn is_dead(&self) -> bool {
        inversions(&self.tiles) % 2 != inversions(&self.goal) % 2
    }

    fn possible_actions(&self) -> Vec<Slide> {
        Slide::ALL
            .into_iter()
            .filter(|&slide| self.target_of(slide).is_some())
            .collect()
    }

    /// # Panics
    /// Panics if `action` would move the blank off the board.
    fn apply(&self, action: &Slide) -> Self {
        let blank = self.blank();
        let target = self
            .target_of(*action)
            .unwrap_or_else(|| panic!("slide {} leaves the board", action));
        let mut next = self.clone();
        next.tiles.swap(blank, target);
        next
    }
}

impl fmt::Display for EightPuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.tiles.chunks(SIDE).enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| if t == 0 { ".".to_string() } else { t.to_string() })
                .collect();
            write!(f, "{}", cells.join(" "))?;
            if r + 1 < SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Counts the non-blank tiles that are not where the goal wants them.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutOfPlaceHeuristic;

impl Heuristic<EightPuzzleState> for OutOfPlaceHeuristic {
    fn calculate(&self, state: &EightPuzzleState) -> u32 {
        state
            .tiles
            .iter()
            .zip(state.goal.iter())
            .filter(|(&t, &g)| t != 0 && t != g)
            .count() as u32
    }
}

/// Sum over the non-blank tiles of the grid distance to their goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanHeuristic;

impl Heuristic<EightPuzzleState> for ManhattanHeuristic {
    fn calculate(&self, state: &EightPuzzleState) -> u32 {
        let mut goal_pos = [0usize; 9];
        for (i, &g) in state.goal.iter().enumerate() {
            goal_pos[g as usize] = i;
        }

        state
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, &t)| t != 0)
            .map(|(i, &t)| {
                let g = goal_pos[t as usize];
                ((i / SIDE).abs_diff(g / SIDE) + (i % SIDE).abs_diff(g % SIDE)) as u32
            })
            .sum()
    }
}

/// 8-puzzle heuristic chosen by name at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EightPuzzleHeuristic {
    #[default]
    Zero,
    OutOfPlace,
    Manhattan,
}

impl EightPuzzleHeuristic {
    /// Looks a heuristic up by name, falling back to `Zero` for unknown names.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for EightPuzzleHeuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "zero" | "dummy" | "none" => Ok(EightPuzzleHeuristic::Zero),
            "out_of_place" | "outofplace" | "misplaced" => Ok(EightPuzzleHeuristic::OutOfPlace),
            "manhattan" => Ok(EightPuzzleHeuristic::Manhattan),
            _ => Err(Error::UnknownHeuristic(s.to_string())),
        }
    }
}

impl fmt::Display for EightPuzzleHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EightPuzzleHeuristic::Zero => "zero",
            EightPuzzleHeuristic::OutOfPlace => "out_of_place",
            EightPuzzleHeuristic::Manhattan => "manhattan",
        };
        f.write_str(name)
    }
}

impl Heuristic<EightPuzzleState> for EightPuzzleHeuristic {
    fn calculate(&self, state: &EightPuzzleState) -> u32 {
        match self {
            EightPuzzleHeuristic::Zero => ZeroHeuristic.calculate(state),
            EightPuzzleHeuristic::OutOfPlace => OutOfPlaceHeuristic.calculate(state),
            EightPuzzleHeuristic::Manhattan => ManhattanHeuristic.calculate(state),
        }
    }
}
