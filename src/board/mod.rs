//! Eight Puzzle board representation.
//!
//! A board is a 3x3 grid holding each digit 0-8 exactly once, where 0 marks
//! the blank cell. The canonical external form is the row-major 9-digit
//! string, e.g. `"125340678"`. The goal layout is `"012345678"`.

mod direction;
mod grid;

pub use direction::Direction;
pub use grid::{Board, GOAL_TILES};
