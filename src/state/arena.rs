//! Append-only store of search-tree states.

use crate::board::{Board, Direction};

use super::{State, StateId};

/// Owns every [`State`] generated during one search run.
///
/// Parents always carry a smaller id than their children, so parent
/// chains are acyclic by construction and depth strictly increases
/// along any chain.
#[derive(Debug, Default)]
pub struct StateArena {
    nodes: Vec<State>,
}

impl StateArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the initial state at depth 0.
    pub fn push_root(&mut self, board: Board) -> StateId {
        self.push(State::root(board))
    }

    /// Looks up a state by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    pub fn get(&self, id: StateId) -> &State {
        &self.nodes[id.0 as usize]
    }

    /// Number of states generated so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Generates every state reachable from `id` by one legal blank move,
    /// in the fixed order up, down, left, right.
    ///
    /// On a 3x3 board the blank always has between two and four legal
    /// moves, so the result never has fewer than two entries.
    pub fn expand(&mut self, id: StateId) -> Vec<StateId> {
        let depth = self.get(id).depth() + 1;
        let mut children = Vec::with_capacity(4);
        for direction in Direction::ALL {
            let mut board = self.get(id).board().clone();
            if board.move_blank(direction) {
                children.push(self.push(State::child(board, id, direction, depth)));
            }
        }
        children
    }

    /// Whether the state's board repeats any board on its own ancestor
    /// chain.
    ///
    /// Only the current path is inspected; reaching the same board along
    /// a different branch is allowed. This guards against loops without
    /// doing full duplicate elimination.
    pub fn creates_cycle(&self, id: StateId) -> bool {
        let state = self.get(id);
        let mut cursor = state.parent();
        while let Some(ancestor_id) = cursor {
            let ancestor = self.get(ancestor_id);
            if ancestor.board() == state.board() {
                return true;
            }
            cursor = ancestor.parent();
        }
        false
    }

    /// The root-to-`id` chain of ids.
    pub fn path(&self, id: StateId) -> Vec<StateId> {
        let mut ids = vec![id];
        let mut cursor = self.get(id).parent();
        while let Some(ancestor_id) = cursor {
            ids.push(ancestor_id);
            cursor = self.get(ancestor_id).parent();
        }
        ids.reverse();
        ids
    }

    fn push(&mut self, state: State) -> StateId {
        let id = StateId(self.nodes.len() as u32);
        self.nodes.push(state);
        id
    }
}
