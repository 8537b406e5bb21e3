//! Per-strategy frontier stores.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::StateId;

use super::Strategy;

/// Heap entry ordered by priority, with equal priorities resolved in
/// favor of the earliest insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PrioritizedState {
    priority: i64,
    seq: u64,
    id: StateId,
}

impl Ord for PrioritizedState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PrioritizedState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The collection of generated-but-not-yet-tested states.
///
/// The removal policy is the strategy; insertion is uniform.
#[derive(Debug)]
pub(crate) enum Frontier {
    Random { states: Vec<StateId>, rng: StdRng },
    Fifo { states: VecDeque<StateId> },
    Lifo { states: Vec<StateId> },
    Priority { heap: BinaryHeap<PrioritizedState>, next_seq: u64 },
}

impl Frontier {
    pub fn for_strategy(strategy: Strategy, seed: u64) -> Self {
        match strategy {
            Strategy::Random => Frontier::Random {
                states: Vec::new(),
                rng: StdRng::seed_from_u64(seed),
            },
            Strategy::BreadthFirst => Frontier::Fifo {
                states: VecDeque::new(),
            },
            Strategy::DepthFirst => Frontier::Lifo { states: Vec::new() },
            Strategy::Greedy | Strategy::AStar => Frontier::Priority {
                heap: BinaryHeap::new(),
                next_seq: 0,
            },
        }
    }

    /// Inserts a state. `priority` only matters to the priority-ordered
    /// variants.
    pub fn push(&mut self, id: StateId, priority: i64) {
        match self {
            Frontier::Random { states, .. } => states.push(id),
            Frontier::Fifo { states } => states.push_back(id),
            Frontier::Lifo { states } => states.push(id),
            Frontier::Priority { heap, next_seq } => {
                heap.push(PrioritizedState {
                    priority,
                    seq: *next_seq,
                    id,
                });
                *next_seq += 1;
            }
        }
    }

    /// Removes and returns the next state under this frontier's policy,
    /// or `None` when the frontier is empty.
    pub fn pop(&mut self) -> Option<StateId> {
        match self {
            Frontier::Random { states, rng } => {
                if states.is_empty() {
                    None
                } else {
                    let index = rng.random_range(0..states.len());
                    Some(states.swap_remove(index))
                }
            }
            Frontier::Fifo { states } => states.pop_front(),
            Frontier::Lifo { states } => states.pop(),
            Frontier::Priority { heap, .. } => heap.pop().map(|entry| entry.id),
        }
    }
}
