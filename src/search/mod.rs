//! The search strategy family.
//!
//! One runner drives every strategy; the strategies differ only in how
//! the frontier picks the next state to test:
//!
//! - **Random**: uniform-random removal.
//! - **BreadthFirst**: strict FIFO; finds shortest solutions first.
//! - **DepthFirst**: strict LIFO.
//! - **Greedy**: best heuristic value first.
//! - **AStar**: best heuristic value plus path cost first (f = g + h).
//!
//! Admission (depth limiting and ancestor-cycle rejection) is shared
//! across all strategies.

mod config;
mod frontier;
mod heuristics;
mod runner;

pub use config::{SearchConfig, Strategy};
pub use heuristics::{h0, h1, h2, Heuristic, HeuristicKind};
pub use runner::{SearchResult, SearchRunner, Solution};
