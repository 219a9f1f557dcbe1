use crate::eight_puzzle::{EightPuzzleState, DEFAULT_GOAL};
use crate::engine::Board;
use crate::error::{Error, Result};

/// Parses an array of string slices into a fill-zone `Board`.
///
/// Each string slice is one row, starting from the top (row 0). Every character
/// is a color written as a hexadecimal digit (`0`-`9`, `a`-`f`, case-insensitive),
/// so a board may use up to 16 colors. Spaces between cells are ignored, which
/// lets rows be written either as `"4553"` or as `"4 5 5 3"`.
///
/// # Arguments
/// * `s`: The rows of the board, top to bottom.
///
/// # Returns
/// * `Ok(Board)` if every row parses and the rows form a non-empty rectangle.
/// * `Err(Error::InvalidBoard)` on an unrecognized character or a ragged/empty grid.
///
/// # Examples
/// ```
/// use puzzle_search::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["4553", "4 3 0 3"]).unwrap();
/// assert_eq!(board.rows(), 2);
/// assert_eq!(board.cols(), 4);
/// assert_eq!(board.get_color(0, 1), 5);
/// assert_eq!(board.get_color(1, 2), 0);
///
/// assert!(board_from_str_array(&["12x"]).is_err());
/// assert!(board_from_str_array(&["123", "12"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board> {
    let mut grid = Vec::with_capacity(s.len());

    for (r, row_str) in s.iter().enumerate() {
        let mut row = Vec::new();
        for (c, ch) in row_str.chars().filter(|ch| !ch.is_whitespace()).enumerate() {
            let color = ch.to_digit(16).ok_or_else(|| {
                Error::InvalidBoard(format!("Unrecognized character '{}' in row {} col {}", ch, r, c))
            })?;
            row.push(color as u8);
        }
        grid.push(row);
    }

    Board::new(grid)
}

/// Parses a whole board description, one row per non-blank line.
///
/// This is the format board files are read in: the same cell syntax as
/// [`board_from_str_array`], with blank lines and lines starting with `#` skipped.
pub fn board_from_str(text: &str) -> Result<Board> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    board_from_str_array(&rows)
}

/// Parses nine tile digits (`0` is the blank) into a layout.
///
/// Whitespace and `/` separators are ignored, so `"123456780"`,
/// `"123 456 780"` and `"123/456/780"` are the same puzzle.
fn tiles_from_str(s: &str) -> Result<[u8; 9]> {
    let digits: Vec<u8> = s
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '/')
        .map(|ch| {
            ch.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| Error::InvalidPuzzle(format!("Unrecognized character '{}'", ch)))
        })
        .collect::<Result<_>>()?;

    <[u8; 9]>::try_from(digits.as_slice())
        .map_err(|_| Error::InvalidPuzzle(format!("Expected 9 tiles, found {}", digits.len())))
}

/// Parses an 8-puzzle start layout, to be solved towards `DEFAULT_GOAL`.
///
/// # Examples
/// ```
/// use puzzle_search::utils::puzzle_from_str;
///
/// let puzzle = puzzle_from_str("123/456/780").unwrap();
/// assert!(puzzle.tiles() == puzzle.goal());
///
/// assert!(puzzle_from_str("12345678").is_err()); // too short
/// assert!(puzzle_from_str("113456780").is_err()); // repeated tile
/// ```
pub fn puzzle_from_str(s: &str) -> Result<EightPuzzleState> {
    EightPuzzleState::new(tiles_from_str(s)?, DEFAULT_GOAL)
}

/// Parses an 8-puzzle start layout together with a custom goal layout.
pub fn puzzle_from_str_with_goal(start: &str, goal: &str) -> Result<EightPuzzleState> {
    EightPuzzleState::new(tiles_from_str(start)?, tiles_from_str(goal)?)
}
