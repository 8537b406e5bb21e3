//! Search strategy selection and run configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use super::heuristics::{h0, Heuristic};

/// The frontier ordering policy. Selecting the next state to test is
/// the only place the strategy variants differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Strategy {
    /// Uniform-random removal from the frontier.
    Random,

    /// Strict FIFO. Finds shortest solutions first when every move
    /// costs 1.
    BreadthFirst,

    /// Strict LIFO.
    DepthFirst,

    /// Lowest heuristic value first. Fast, no optimality guarantee.
    Greedy,

    /// Lowest heuristic-plus-depth first (f = g + h). Optimal when the
    /// heuristic is admissible.
    AStar,
}

impl Strategy {
    /// The external selector name for this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::BreadthFirst => "BFS",
            Strategy::DepthFirst => "DFS",
            Strategy::Greedy => "Greedy",
            Strategy::AStar => "A*",
        }
    }

    /// Whether this strategy consults the configured heuristic.
    pub fn is_informed(self) -> bool {
        matches!(self, Strategy::Greedy | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Strategy::Random),
            "BFS" => Ok(Strategy::BreadthFirst),
            "DFS" => Ok(Strategy::DepthFirst),
            "Greedy" => Ok(Strategy::Greedy),
            "A*" => Ok(Strategy::AStar),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Configuration for one search run.
///
/// # Examples
///
/// ```
/// use puzzle_search::search::{h2, SearchConfig, Strategy};
///
/// let config = SearchConfig::default()
///     .with_strategy(Strategy::AStar)
///     .with_heuristic(h2)
///     .with_depth_limit(20);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Frontier ordering policy.
    pub strategy: Strategy,

    /// Inclusive maximum depth admitted to the frontier. `None` means
    /// unlimited.
    pub depth_limit: Option<u32>,

    /// Heuristic consulted by the Greedy and A* strategies; ignored by
    /// the others.
    pub heuristic: Heuristic,

    /// Seed for the random strategy's frontier. `None` draws a fresh
    /// seed per run.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BreadthFirst,
            depth_limit: None,
            heuristic: h0,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_depth_limit(mut self, limit: u32) -> Self {
        self.depth_limit = Some(limit);
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
