//! Search-tree states and their lineage.
//!
//! A [`State`] pairs a board with the move that produced it and the depth
//! at which it sits. Lineage is held in a [`StateArena`]: an append-only
//! store where each state names its parent by [`StateId`]. Cycle checking
//! and solution-path reconstruction are upward walks over those ids.

mod arena;
mod node;

pub use arena::StateArena;
pub use node::{State, StateId};
