//! The 3x3 tile grid and its distance-to-goal metrics.

use std::fmt;

use super::Direction;
use crate::error::{Error, Result};

/// The solved layout. Tile value at (r, c) is `3r + c`, with the blank
/// in the top-left corner.
pub const GOAL_TILES: [[u8; 3]; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// An Eight Puzzle board: a 3x3 grid of the digits 0-8 with 0 as the
/// blank, plus the blank's cached coordinates.
///
/// Boards are value objects. `Clone` produces an independent copy, and
/// equality / hashing agree with [`Board::digit_string`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    tiles: [[u8; 3]; 3],
    blank_row: usize,
    blank_col: usize,
}

impl Board {
    /// Parses a board from its row-major 9-digit string.
    ///
    /// Fails unless the input is exactly 9 characters forming a
    /// permutation of the digits 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzle_search::board::Board;
    ///
    /// let board = Board::from_digits("125340678").unwrap();
    /// assert_eq!(board.digit_string(), "125340678");
    /// assert!(Board::from_digits("123").is_err());
    /// assert!(Board::from_digits("111111111").is_err());
    /// ```
    pub fn from_digits(digits: &str) -> Result<Self> {
        let len = digits.chars().count();
        if len != 9 {
            return Err(Error::InvalidBoardLength {
                got: len,
                context: digits.to_string(),
            });
        }

        let mut tiles = [[0u8; 3]; 3];
        let mut seen = [false; 9];
        let mut blank_row = 0;
        let mut blank_col = 0;

        for (i, ch) in digits.chars().enumerate() {
            let value = match ch.to_digit(10) {
                Some(d) if d <= 8 => d as u8,
                _ => {
                    return Err(Error::InvalidBoardCharacter {
                        character: ch,
                        position: i,
                        context: digits.to_string(),
                    })
                }
            };
            // 9 distinct values out of 0-8 is a permutation, so a missing
            // digit always shows up as a duplicate of another.
            if seen[value as usize] {
                return Err(Error::DuplicateDigit {
                    digit: ch,
                    context: digits.to_string(),
                });
            }
            seen[value as usize] = true;
            tiles[i / 3][i % 3] = value;
            if value == 0 {
                blank_row = i / 3;
                blank_col = i % 3;
            }
        }

        Ok(Self {
            tiles,
            blank_row,
            blank_col,
        })
    }

    /// Moves the blank one cell in `direction`.
    ///
    /// Returns `false` and leaves the board unchanged when the target cell
    /// is off-grid. This is a normal outcome, not an error.
    pub fn move_blank(&mut self, direction: Direction) -> bool {
        let (dr, dc) = direction.offset();
        let new_row = self.blank_row as i32 + dr;
        let new_col = self.blank_col as i32 + dc;

        if !(0..3).contains(&new_row) || !(0..3).contains(&new_col) {
            return false;
        }

        let (new_row, new_col) = (new_row as usize, new_col as usize);
        self.tiles[self.blank_row][self.blank_col] = self.tiles[new_row][new_col];
        self.tiles[new_row][new_col] = 0;
        self.blank_row = new_row;
        self.blank_col = new_col;
        true
    }

    /// Row-major 9-digit canonical form.
    pub fn digit_string(&self) -> String {
        let mut s = String::with_capacity(9);
        for row in &self.tiles {
            for &value in row {
                s.push((b'0' + value) as char);
            }
        }
        s
    }

    /// The blank's (row, col) coordinates.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Whether the grid matches [`GOAL_TILES`].
    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// Number of non-blank tiles not on their goal cell. Heuristic h1.
    pub fn num_misplaced(&self) -> u32 {
        let mut count = 0;
        for r in 0..3 {
            for c in 0..3 {
                let value = self.tiles[r][c];
                if value != 0 && value != (3 * r + c) as u8 {
                    count += 1;
                }
            }
        }
        count
    }

    /// Sum over non-blank tiles of the row and column distance between
    /// each tile and its goal cell (value `v` belongs at `(v / 3, v % 3)`).
    /// Heuristic h2; never overestimates the true remaining move count.
    pub fn manhattan_distance(&self) -> u32 {
        let mut total = 0u32;
        for r in 0..3 {
            for c in 0..3 {
                let value = self.tiles[r][c];
                if value == 0 {
                    continue;
                }
                let goal_row = (value / 3) as usize;
                let goal_col = (value % 3) as usize;
                total += (r.abs_diff(goal_row) + c.abs_diff(goal_col)) as u32;
            }
        }
        total
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.tiles {
            for &value in row {
                if value == 0 {
                    write!(f, "_ ")?;
                } else {
                    write!(f, "{value} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
