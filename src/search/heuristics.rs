//! Heuristic functions for informed search.
//!
//! A heuristic is any pure function from a state to a non-negative
//! estimate of the remaining distance to the goal. The searcher stores
//! and invokes it without inspecting its internals, so callers may pass
//! their own function alongside the provided h0/h1/h2.

use std::str::FromStr;

use crate::error::Error;
use crate::state::State;

/// A pure estimate of remaining distance to the goal.
pub type Heuristic = fn(&State) -> u32;

/// The constant-zero heuristic. Admissible; reduces A* to uniform-cost
/// search.
pub fn h0(_state: &State) -> u32 {
    0
}

/// Number of misplaced tiles. Admissible but weaker than [`h2`].
pub fn h1(state: &State) -> u32 {
    state.board().num_misplaced()
}

/// Manhattan distance over all tiles. Admissible.
pub fn h2(state: &State) -> u32 {
    state.board().manhattan_distance()
}

/// Named selection of one of the provided heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum HeuristicKind {
    Zero,
    Misplaced,
    Manhattan,
}

impl HeuristicKind {
    /// The function this name stands for.
    pub fn resolve(self) -> Heuristic {
        match self {
            HeuristicKind::Zero => h0,
            HeuristicKind::Misplaced => h1,
            HeuristicKind::Manhattan => h2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Zero => "h0",
            HeuristicKind::Misplaced => "h1",
            HeuristicKind::Manhattan => "h2",
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h0" => Ok(HeuristicKind::Zero),
            "h1" => Ok(HeuristicKind::Misplaced),
            "h2" => Ok(HeuristicKind::Manhattan),
            _ => Err(Error::UnknownHeuristic {
                name: s.to_string(),
            }),
        }
    }
}
