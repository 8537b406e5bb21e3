//! The search loop shared by every strategy.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::board::{Board, Direction};
use crate::state::{State, StateArena, StateId};

use super::frontier::Frontier;
use super::{SearchConfig, Strategy};

/// Result of one search run.
///
/// `cancelled` distinguishes an externally terminated run from one that
/// exhausted its frontier; neither carries a solution.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchResult {
    /// The goal state's path, when one was found.
    pub solution: Option<Solution>,

    /// Number of states removed from the frontier and checked for goal
    /// status.
    pub states_tested: usize,

    /// Whether the cancellation token stopped the run.
    pub cancelled: bool,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// A root-to-goal move sequence with the board after each move.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    moves: Vec<Direction>,
    boards: Vec<Board>,
}

impl Solution {
    fn from_path(arena: &StateArena, goal: StateId) -> Self {
        let path = arena.path(goal);
        let mut moves = Vec::with_capacity(path.len() - 1);
        let mut boards = Vec::with_capacity(path.len());
        for id in path {
            let state = arena.get(id);
            if let Some(direction) = state.last_move() {
                moves.push(direction);
            }
            boards.push(state.board().clone());
        }
        Self { moves, boards }
    }

    /// Number of moves from the initial board to the goal.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The move sequence, in execution order.
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Board snapshots: the initial board followed by the board after
    /// each move. Always one longer than [`Solution::moves`].
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn initial_board(&self) -> &Board {
        &self.boards[0]
    }

    pub fn final_board(&self) -> &Board {
        &self.boards[self.boards.len() - 1]
    }
}

impl fmt::Display for Solution {
    /// Renders the move-by-move path from the initial state to the goal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "initial state")?;
        write!(f, "{}", self.boards[0])?;
        for (direction, board) in self.moves.iter().zip(&self.boards[1..]) {
            writeln!(f, "move the blank {direction}")?;
            write!(f, "{board}")?;
        }
        Ok(())
    }
}

/// Executes state-space search under a [`SearchConfig`].
pub struct SearchRunner;

impl SearchRunner {
    /// Runs a search from `initial` to the goal layout.
    pub fn run(config: &SearchConfig, initial: &Board) -> SearchResult {
        Self::run_with_cancel(config, initial, None)
    }

    /// Runs a search with an optional cancellation token, checked once
    /// per select/test/expand iteration.
    pub fn run_with_cancel(
        config: &SearchConfig,
        initial: &Board,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SearchResult {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut frontier = Frontier::for_strategy(config.strategy, seed);
        let mut arena = StateArena::new();
        let mut states_tested = 0usize;

        // The initial state bypasses admission: a root deeper than the
        // depth limit or equal to the goal is still tested.
        let root = arena.push_root(initial.clone());
        frontier.push(root, priority_of(config, arena.get(root)));

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return SearchResult {
                        solution: None,
                        states_tested,
                        cancelled: true,
                    };
                }
            }

            let Some(id) = frontier.pop() else {
                // Out of untested states with no goal seen. A legitimate
                // outcome, reachable only under a depth limit.
                return SearchResult {
                    solution: None,
                    states_tested,
                    cancelled: false,
                };
            };

            states_tested += 1;
            if arena.get(id).is_goal() {
                return SearchResult {
                    solution: Some(Solution::from_path(&arena, id)),
                    states_tested,
                    cancelled: false,
                };
            }

            for child in arena.expand(id) {
                if should_admit(config, &arena, child) {
                    frontier.push(child, priority_of(config, arena.get(child)));
                }
            }
        }
    }
}

/// Shared admission policy: within the depth limit and no repeat of an
/// ancestor board.
fn should_admit(config: &SearchConfig, arena: &StateArena, id: StateId) -> bool {
    if let Some(limit) = config.depth_limit {
        if arena.get(id).depth() > limit {
            return false;
        }
    }
    !arena.creates_cycle(id)
}

/// Frontier priority of a state. Negated so that the maximum-priority
/// entry is the one with the lowest heuristic value (Greedy) or lowest
/// f = g + h (A*). Strategies without an ordering key get 0.
fn priority_of(config: &SearchConfig, state: &State) -> i64 {
    match config.strategy {
        Strategy::Greedy => -i64::from((config.heuristic)(state)),
        Strategy::AStar => -i64::from((config.heuristic)(state) + state.depth()),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{h0, h1, h2, Heuristic};

    const ALL_STRATEGIES: [Strategy; 5] = [
        Strategy::Random,
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::Greedy,
        Strategy::AStar,
    ];

    fn board(digits: &str) -> Board {
        Board::from_digits(digits).unwrap()
    }

    #[test]
    fn test_goal_board_solves_in_zero_moves_under_every_strategy() {
        for strategy in ALL_STRATEGIES {
            let config = SearchConfig::default()
                .with_strategy(strategy)
                .with_heuristic(h2)
                .with_seed(42);
            let result = SearchRunner::run(&config, &board("012345678"));
            let solution = result.solution.unwrap_or_else(|| {
                panic!("{strategy} must solve the goal board");
            });
            assert_eq!(solution.move_count(), 0);
            assert_eq!(result.states_tested, 1);
        }
    }

    #[test]
    fn test_bfs_finds_the_shortest_solution() {
        let config = SearchConfig::default();
        let result = SearchRunner::run(&config, &board("125340678"));
        let solution = result.solution.expect("fixture is solvable");
        assert_eq!(solution.move_count(), 3);
        assert_eq!(
            solution.moves(),
            [Direction::Up, Direction::Left, Direction::Left]
        );
        assert!(solution.final_board().is_goal());
    }

    #[test]
    fn test_bfs_optimal_on_known_four_move_fixture() {
        let config = SearchConfig::default();
        let result = SearchRunner::run(&config, &board("312475680"));
        assert_eq!(result.solution.expect("solvable").move_count(), 4);
    }

    #[test]
    fn test_astar_matches_bfs_optimum() {
        let start = board("312475680");
        let bfs = SearchRunner::run(&SearchConfig::default(), &start);
        for heuristic in [h0, h1, h2] {
            let config = SearchConfig::default()
                .with_strategy(Strategy::AStar)
                .with_heuristic(heuristic);
            let astar = SearchRunner::run(&config, &start);
            assert_eq!(
                astar.solution.expect("solvable").move_count(),
                bfs.solution.as_ref().expect("solvable").move_count(),
                "A* with an admissible heuristic is optimal"
            );
        }
    }

    #[test]
    fn test_astar_with_h2_tests_no_more_states_than_with_h0() {
        let start = board("312475680");
        let run = |heuristic: Heuristic| {
            let config = SearchConfig::default()
                .with_strategy(Strategy::AStar)
                .with_heuristic(heuristic);
            SearchRunner::run(&config, &start).states_tested
        };
        assert!(run(h2) <= run(h0), "stronger heuristic prunes harder");
    }

    #[test]
    fn test_greedy_reaches_the_goal() {
        let config = SearchConfig::default()
            .with_strategy(Strategy::Greedy)
            .with_heuristic(h2);
        let result = SearchRunner::run(&config, &board("125340678"));
        let solution = result.solution.expect("fixture is solvable");
        assert!(solution.final_board().is_goal());
        assert!(solution.move_count() >= 3, "3 is the optimum");
    }

    #[test]
    fn test_depth_limit_zero_fails_unless_already_goal() {
        let config = SearchConfig::default()
            .with_strategy(Strategy::DepthFirst)
            .with_depth_limit(0);

        let result = SearchRunner::run(&config, &board("125340678"));
        assert!(!result.is_solved());
        assert!(!result.cancelled);
        assert_eq!(result.states_tested, 1, "only the root is tested");

        let result = SearchRunner::run(&config, &board("012345678"));
        assert_eq!(result.solution.expect("root is the goal").move_count(), 0);
    }

    #[test]
    fn test_depth_limit_below_optimum_exhausts_the_frontier() {
        // The fixture needs 3 moves; a limit of 2 prunes every path.
        let config = SearchConfig::default().with_depth_limit(2);
        let result = SearchRunner::run(&config, &board("125340678"));
        assert!(!result.is_solved());
        assert!(!result.cancelled);
        assert!(result.states_tested > 1);
    }

    #[test]
    fn test_depth_limited_dfs_finds_a_solution() {
        let config = SearchConfig::default()
            .with_strategy(Strategy::DepthFirst)
            .with_depth_limit(5);
        let result = SearchRunner::run(&config, &board("125340678"));
        let solution = result.solution.expect("goal lies within the limit");
        assert!(solution.final_board().is_goal());
        assert!(solution.move_count() <= 5);
    }

    #[test]
    fn test_random_exhausts_the_depth_limited_space() {
        // With a depth limit the admissible space is finite, so random
        // selection must still reach the goal at depth 3, whatever the
        // seed does to the ordering.
        for seed in [1, 2, 3] {
            let config = SearchConfig::default()
                .with_strategy(Strategy::Random)
                .with_depth_limit(3)
                .with_seed(seed);
            let result = SearchRunner::run(&config, &board("125340678"));
            assert_eq!(result.solution.expect("solvable").move_count(), 3);
        }
    }

    #[test]
    fn test_preset_cancellation_reports_terminated() {
        // Token set before the run starts: cancellation must win on the
        // first iteration and be distinguishable from exhaustion.
        let cancel = Arc::new(AtomicBool::new(true));
        let config = SearchConfig::default();
        let result = SearchRunner::run_with_cancel(&config, &board("125340678"), Some(cancel));
        assert!(result.cancelled);
        assert!(!result.is_solved());
        assert_eq!(result.states_tested, 0);
    }

    #[test]
    fn test_solution_snapshots_track_moves() {
        let config = SearchConfig::default();
        let solution = SearchRunner::run(&config, &board("125340678"))
            .solution
            .expect("solvable");
        assert_eq!(solution.boards().len(), solution.move_count() + 1);
        assert_eq!(solution.initial_board().digit_string(), "125340678");

        // Replaying the moves on the initial board reproduces each
        // snapshot.
        let mut replay = solution.initial_board().clone();
        for (direction, expected) in solution.moves().iter().zip(&solution.boards()[1..]) {
            assert!(replay.move_blank(*direction));
            assert_eq!(&replay, expected);
        }
        assert!(replay.is_goal());
    }

    #[test]
    fn test_solution_display_reports_every_step() {
        let config = SearchConfig::default();
        let solution = SearchRunner::run(&config, &board("312045678"))
            .solution
            .expect("one move from the goal");
        let rendered = solution.to_string();
        assert!(rendered.starts_with("initial state\n"));
        assert!(rendered.contains("move the blank up"));
        assert_eq!(rendered.matches("move the blank").count(), 1);
    }
}
