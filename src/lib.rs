//! Eight Puzzle state-space search framework.
//!
//! Finds a sequence of blank-tile moves transforming a scrambled 3x3
//! board into the ordered goal layout. One search loop drives a family
//! of interchangeable strategies:
//!
//! - **Random**: uniform-random frontier removal.
//! - **BFS**: breadth-first, strict FIFO; finds shortest solutions first.
//! - **DFS**: depth-first, strict LIFO.
//! - **Greedy**: best-first on a pluggable heuristic.
//! - **A\***: best-first on heuristic plus path cost; optimal with an
//!   admissible heuristic (h1 misplaced tiles, h2 Manhattan distance).
//!
//! # Architecture
//!
//! [`board`] holds the grid and its distance-to-goal metrics. [`state`]
//! tracks lineage in an arena of parent-indexed records, giving cheap
//! ancestor-cycle checks and solution-path reconstruction. [`search`]
//! supplies the shared admission/expansion loop and the per-strategy
//! frontier orderings. [`batch`] aggregates runs over many boards, and
//! [`cli`] exposes both through the `puzzle` binary.
//!
//! # Examples
//!
//! ```
//! use puzzle_search::board::Board;
//! use puzzle_search::search::{h2, SearchConfig, SearchRunner, Strategy};
//!
//! let board = Board::from_digits("125340678")?;
//! let config = SearchConfig::default()
//!     .with_strategy(Strategy::AStar)
//!     .with_heuristic(h2);
//!
//! let result = SearchRunner::run(&config, &board);
//! assert_eq!(result.solution.unwrap().move_count(), 3);
//! # Ok::<(), puzzle_search::Error>(())
//! ```

pub mod batch;
pub mod board;
pub mod cli;
pub mod error;
pub mod search;
pub mod state;

pub use error::{Error, Result};
