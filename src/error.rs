//! Error types for the puzzle-search crate.

use thiserror::Error;

/// Main error type for the puzzle-search crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string must have 9 characters, got {got} in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}' (expected a digit 0-8)")]
    InvalidBoardCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("digit '{digit}' appears more than once in '{context}'")]
    DuplicateDigit { digit: char, context: String },

    #[error("unknown strategy '{name}' (expected one of: random, BFS, DFS, Greedy, A*)")]
    UnknownStrategy { name: String },

    #[error("unknown heuristic '{name}' (expected one of: h0, h1, h2)")]
    UnknownHeuristic { name: String },
}

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
