//! Board engine for the fill-zone (flood-it) puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Board`: a rectangular grid of colors with flood fill from the top-left cell,
//!   region (group) finding, random generation and terminal rendering.
//! - `FillZoneGame`: a play session on a board, with a step counter and undo.
//!
//! The search itself works on the contracted region graph in
//! [`crate::fill_zone`]; `Board` is the ground truth that solutions are replayed on.
use crate::error::{Error, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::fmt;

/// Seed used by `Board::new_random` so that repeated calls give the same board.
pub const DEFAULT_SEED: u64 = 514514;

/// Largest number of distinct colors a board may use.
pub const MAX_COLORS: u8 = 16;

const DELTAS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// ANSI background color codes, cycled for color indices beyond the table.
const ANSI_BACKGROUNDS: [&str; 8] = ["41", "42", "43", "44", "45", "46", "47", "100"];

/// A rectangular fill-zone board.
///
/// Each cell holds a color index. The player (or the solver) repeatedly picks a
/// color for the region containing the top-left cell; the region then merges with
/// every adjacent region of that color. The board is solved once every cell has
/// the same color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Vec<Vec<u8>>,
}

impl Board {
    /// Creates a board from rows of color indices.
    ///
    /// # Errors
    /// Returns `Error::InvalidBoard` if there are no rows, a row is empty, rows
    /// have different lengths, or a color is `MAX_COLORS` or above.
    ///
    /// # Examples
    /// ```
    /// use puzzle_search::engine::Board;
    /// let board = Board::new(vec![vec![0, 1], vec![1, 1]]).unwrap();
    /// assert_eq!(board.rows(), 2);
    /// assert_eq!(board.get_color(1, 0), 1);
    /// assert!(Board::new(vec![vec![0, 1], vec![1]]).is_err());
    /// ```
    pub fn new(grid: Vec<Vec<u8>>) -> Result<Self> {
        let cols = match grid.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::InvalidBoard("board has no cells".to_string())),
        };
        for (r, row) in grid.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    cols
                )));
            }
            if let Some(&color) = row.iter().find(|&&c| c >= MAX_COLORS) {
                return Err(Error::InvalidBoard(format!(
                    "color {} in row {} is out of range (max {})",
                    color,
                    r,
                    MAX_COLORS - 1
                )));
            }
        }
        Ok(Board { grid })
    }

    /// Creates a square random board with a fixed seed (`DEFAULT_SEED`).
    pub fn new_random(size: usize, color_count: u8) -> Result<Self> {
        Self::new_random_with_seed(size, size, color_count, DEFAULT_SEED)
    }

    /// Creates a random `rows` x `cols` board using colors `0..color_count`.
    ///
    /// The same seed always produces the same board.
    ///
    /// # Errors
    /// Returns `Error::InvalidBoard` if a dimension is zero or `color_count` is
    /// not in `1..=MAX_COLORS`.
    pub fn new_random_with_seed(rows: usize, cols: usize, color_count: u8, seed: u64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidBoard(format!(
                "board dimensions must be positive, got {}x{}",
                rows, cols
            )));
        }
        if color_count == 0 || color_count > MAX_COLORS {
            return Err(Error::InvalidBoard(format!(
                "color count must be between 1 and {}, got {}",
                MAX_COLORS, color_count
            )));
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(0..color_count)).collect())
            .collect();
        Ok(Board { grid })
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    /// Returns the color at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn get_color(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Returns the underlying rows of color indices.
    pub fn get_grid(&self) -> &[Vec<u8>] {
        &self.grid
    }

    /// The color of the top-left region, the one the player controls.
    pub fn current_color(&self) -> u8 {
        self.grid[0][0]
    }

    /// Distinct colors present on the board, ascending.
    pub fn colors(&self) -> Vec<u8> {
        let mut seen = [false; MAX_COLORS as usize];
        for &color in self.grid.iter().flatten() {
            seen[color as usize] = true;
        }
        (0..MAX_COLORS).filter(|&c| seen[c as usize]).collect()
    }

    /// In-bounds orthogonal neighbours of `(r, c)`.
    pub(crate) fn neighbors(&self, r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        DELTAS.iter().filter_map(move |&(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            (nr < self.rows() && nc < self.cols()).then_some((nr, nc))
        })
    }

    /// Finds the connected region of same-colored cells containing `(r, c)`.
    ///
    /// Cells are connected horizontally and vertically, not diagonally. The
    /// search is a breadth-first flood from the starting cell.
    ///
    /// # Returns
    /// The coordinates of every cell in the region, sorted row-major. A region
    /// always contains at least the starting cell.
    ///
    /// # Panics
    /// Panics if `(r, c)` is outside the board.
    pub fn find_group(&self, r: usize, c: usize) -> Vec<(usize, usize)> {
        let color = self.get_color(r, c);
        let mut group = Vec::new();
        let mut q = VecDeque::new();
        let mut visited = vec![vec![false; self.cols()]; self.rows()];

        q.push_back((r, c));
        visited[r][c] = true;

        while let Some((cr, cc)) = q.pop_front() {
            group.push((cr, cc));
            for (nr, nc) in self.neighbors(cr, cc) {
                if !visited[nr][nc] && self.grid[nr][nc] == color {
                    visited[nr][nc] = true;
                    q.push_back((nr, nc));
                }
            }
        }

        group.sort_unstable();
        group
    }

    /// Finds every maximal same-colored region of the board.
    ///
    /// Regions are listed in the order of their first cell (row-major), so the
    /// region containing the top-left cell always comes first.
    pub fn find_all_groups(&self) -> Vec<Vec<(usize, usize)>> {
        let mut all_groups = Vec::new();
        let mut assigned = vec![vec![false; self.cols()]; self.rows()];

        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if assigned[r][c] {
                    continue;
                }
                let group = self.find_group(r, c);
                for &(gr, gc) in &group {
                    assigned[gr][gc] = true;
                }
                all_groups.push(group);
            }
        }
        all_groups
    }

    /// Recolors the region containing the top-left cell with `color`.
    ///
    /// After the call the top-left region also spans every region of `color`
    /// that touched it. Picking the region's current color does nothing.
    ///
    /// # Returns
    /// The number of cells that changed color.
    pub fn change_color(&mut self, color: u8) -> usize {
        if self.current_color() == color {
            return 0;
        }
        let region = self.find_group(0, 0);
        for &(r, c) in &region {
            self.grid[r][c] = color;
        }
        region.len()
    }

    /// Returns `true` if every cell has the same color.
    pub fn is_solved(&self) -> bool {
        let color = self.current_color();
        self.grid.iter().flatten().all(|&c| c == color)
    }

    /// Replays `colors` on a copy of the board and reports whether the copy ends
    /// up solved. The board itself is not modified.
    pub fn check_solution(&self, colors: &[u8]) -> bool {
        let mut copy = self.clone();
        for &color in colors {
            copy.change_color(color);
        }
        copy.is_solved()
    }

    /// Renders the board for a terminal, with row and column indices and one
    /// ANSI-colored block per cell.
    ///
    /// Cells of the top-left region are marked with `..` when `mark_current` is
    /// set, so a player can see how far the flood has spread.
    pub fn to_string_with_highlight(&self, mark_current: bool) -> String {
        let current: Vec<(usize, usize)> = if mark_current {
            self.find_group(0, 0)
        } else {
            Vec::new()
        };

        let mut output = String::new();
        output.push_str("   ");
        for c_idx in 0..self.cols() {
            output.push_str(&format!("{:<2}", c_idx % 100));
        }
        output.push('\n');

        for (r_idx, row) in self.grid.iter().enumerate() {
            output.push_str(&format!("{:<3}", r_idx % 1000));
            for (c_idx, &color) in row.iter().enumerate() {
                let code = ANSI_BACKGROUNDS[color as usize % ANSI_BACKGROUNDS.len()];
                let content = if current.binary_search(&(r_idx, c_idx)).is_ok() {
                    ".."
                } else {
                    "  "
                };
                output.push_str(&format!("\x1b[1;{}m{}\x1b[m", code, content));
            }
            if r_idx < self.rows() - 1 {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    /// Plain-text form: one line per row, colors separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if r + 1 < self.rows() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// A fill-zone play session.
///
/// Keeps the board, the number of moves played and a history of earlier boards
/// so moves can be undone.
///
/// # Examples
/// ```
/// use puzzle_search::engine::{Board, FillZoneGame};
/// let board = Board::new(vec![vec![0, 1], vec![1, 2]]).unwrap();
/// let mut game = FillZoneGame::new_with_board(board);
///
/// assert!(game.process_move(1));
/// assert!(!game.process_move(1)); // already that color
/// assert!(game.process_move(2));
/// assert!(game.is_game_over());
/// assert_eq!(game.steps(), 2);
///
/// assert!(game.undo_last_move());
/// assert_eq!(game.steps(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct FillZoneGame {
    board: Board,
    steps: u32,
    history: Vec<Board>,
}

impl FillZoneGame {
    pub fn new_with_board(initial_board: Board) -> Self {
        FillZoneGame {
            board: initial_board,
            steps: 0,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of moves played (undone moves are not counted).
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Plays `color`.
    ///
    /// # Returns
    /// `false`, without changing anything, if the game is over, if `color` is
    /// already the current color, or if no cell on the board has that color.
    pub fn process_move(&mut self, color: u8) -> bool {
        if self.is_game_over() || color == self.board.current_color() {
            return false;
        }
        if !self.board.colors().contains(&color) {
            return false;
        }

        self.history.push(self.board.clone());
        self.board.change_color(color);
        self.steps += 1;
        true
    }

    /// Restores the board from before the last move.
    ///
    /// # Returns
    /// `false` if no move has been played yet.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                self.steps -= 1;
                true
            }
            None => false,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    fn scenario_board() -> Board {
        board_from_str_array(&["4553", "4303", "3402", "1510"]).unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_and_empty() {
        assert!(Board::new(vec![]).is_err());
        assert!(Board::new(vec![vec![]]).is_err());
        assert!(Board::new(vec![vec![1, 2], vec![3]]).is_err());
        assert!(Board::new(vec![vec![MAX_COLORS]]).is_err());
        assert!(Board::new(vec![vec![1]]).is_ok());
    }

    #[test]
    fn test_new_random_with_seed_determinism() {
        let board1 = Board::new_random_with_seed(6, 6, 4, 123).unwrap();
        let board2 = Board::new_random_with_seed(6, 6, 4, 123).unwrap();
        assert_eq!(board1, board2, "Boards with the same seed must be identical.");

        let board3 = Board::new_random_with_seed(6, 6, 4, 124).unwrap();
        assert_ne!(board1, board3, "Boards with different seeds should differ.");

        assert!(board1.get_grid().iter().flatten().all(|&c| c < 4));
        assert_eq!(Board::new_random(6, 4).unwrap(), Board::new_random(6, 4).unwrap());
    }

    #[test]
    fn test_new_random_rejects_bad_settings() {
        assert!(Board::new_random_with_seed(0, 3, 3, 1).is_err());
        assert!(Board::new_random_with_seed(3, 3, 0, 1).is_err());
        assert!(Board::new_random_with_seed(3, 3, MAX_COLORS + 1, 1).is_err());
    }

    #[test]
    fn test_find_group() {
        let board = scenario_board();
        assert_eq!(board.find_group(0, 0), vec![(0, 0), (1, 0)]);
        assert_eq!(board.find_group(0, 1), vec![(0, 1), (0, 2)]);
        assert_eq!(board.find_group(1, 2), vec![(1, 2), (2, 2)]);
        assert_eq!(board.find_group(3, 0), vec![(3, 0)]);
    }

    #[test]
    fn test_find_all_groups_covers_board_once() {
        let board = scenario_board();
        let groups = board.find_all_groups();
        let cells: usize = groups.iter().map(Vec::len).sum();
        assert_eq!(cells, 16);
        assert_eq!(groups[0], board.find_group(0, 0));
        assert_eq!(groups.len(), 12);
    }

    #[test]
    fn test_change_color_floods_top_left_region() {
        let mut board = scenario_board();
        assert_eq!(board.change_color(5), 2);
        assert_eq!(board.find_group(0, 0), vec![(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(board.change_color(5), 0);
        assert_eq!(board.get_color(3, 0), 1);
    }

    #[test]
    fn test_is_solved_and_check_solution() {
        let board = board_from_str_array(&["01", "11"]).unwrap();
        assert!(!board.is_solved());
        assert!(board.check_solution(&[1]));
        assert!(!board.check_solution(&[]));
        assert!(!board.is_solved(), "check_solution must not touch the board");

        let single = board_from_str_array(&["222"]).unwrap();
        assert!(single.is_solved());
        assert!(single.check_solution(&[]));
    }

    #[test]
    fn test_colors_sorted_and_distinct() {
        assert_eq!(scenario_board().colors(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_display_board_formatting() {
        let board = board_from_str_array(&["01", "23"]).unwrap();
        assert_eq!(board.to_string(), "0 1\n2 3");

        let rendered = board.to_string_with_highlight(true);
        assert_eq!(rendered.lines().count(), board.rows() + 1);
        assert!(rendered.starts_with("   0 1 "));
        assert!(rendered.contains(".."));
        assert!(!board.to_string_with_highlight(false).contains(".."));
    }

    #[test]
    fn test_game_moves_and_undo() {
        let mut game = FillZoneGame::new_with_board(scenario_board());
        assert!(!game.process_move(4), "current color is not a move");
        assert!(!game.process_move(9), "color absent from the board");
        assert!(!game.undo_last_move());

        assert!(game.process_move(3));
        assert_eq!(game.steps(), 1);
        assert_eq!(game.board().current_color(), 3);

        assert!(game.undo_last_move());
        assert_eq!(game.steps(), 0);
        assert_eq!(game.board(), &scenario_board());
    }

    #[test]
    fn test_game_over_blocks_moves() {
        let mut game = FillZoneGame::new_with_board(board_from_str_array(&["00", "01"]).unwrap());
        assert!(game.process_move(1));
        assert!(game.is_game_over());
        assert!(!game.process_move(0));
    }
}
