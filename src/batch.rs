//! Batch runs over sequences of board strings.
//!
//! Runs the same configuration against each board and aggregates the
//! results. IO stays with the caller; this module only sees lines.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::board::Board;
use crate::search::{SearchConfig, SearchRunner};

/// Outcome of one batch line.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LineOutcome {
    /// The board was solved.
    Solved {
        board: String,
        moves: usize,
        states_tested: usize,
    },

    /// The search exhausted its frontier without a goal.
    NoSolution { board: String, states_tested: usize },

    /// The search was cancelled before completing.
    Cancelled { board: String, states_tested: usize },

    /// The line failed board validation; the batch continues.
    Invalid { line: String, message: String },
}

impl LineOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, LineOutcome::Solved { .. })
    }
}

/// Aggregated results of a batch run.
///
/// The means cover solved lines only; unsolved, cancelled, and invalid
/// lines are reported individually in `outcomes` but excluded from the
/// averages.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchReport {
    /// Per-line outcomes, in input order.
    pub outcomes: Vec<LineOutcome>,

    /// Number of solved lines.
    pub solved: usize,

    /// Mean move count over solved lines, `None` when nothing solved.
    pub mean_moves: Option<f64>,

    /// Mean tested-state count over solved lines, `None` when nothing
    /// solved.
    pub mean_states_tested: Option<f64>,
}

/// Runs `config` against each line. Empty lines (after trimming) are
/// skipped; malformed lines are reported and the batch continues.
pub fn run_batch<'a, I>(lines: I, config: &SearchConfig) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    run_batch_with_cancel(lines, config, None)
}

/// Like [`run_batch`], with a cancellation token shared by every line's
/// search. Once the token is set, remaining lines report as cancelled.
pub fn run_batch_with_cancel<'a, I>(
    lines: I,
    config: &SearchConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> BatchReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut outcomes = Vec::new();
    let mut solved = 0usize;
    let mut total_moves = 0usize;
    let mut total_tested = 0usize;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let board = match Board::from_digits(line) {
            Ok(board) => board,
            Err(error) => {
                outcomes.push(LineOutcome::Invalid {
                    line: line.to_string(),
                    message: error.to_string(),
                });
                continue;
            }
        };

        let result = SearchRunner::run_with_cancel(config, &board, cancel.clone());
        let outcome = if let Some(solution) = result.solution {
            solved += 1;
            total_moves += solution.move_count();
            total_tested += result.states_tested;
            LineOutcome::Solved {
                board: line.to_string(),
                moves: solution.move_count(),
                states_tested: result.states_tested,
            }
        } else if result.cancelled {
            LineOutcome::Cancelled {
                board: line.to_string(),
                states_tested: result.states_tested,
            }
        } else {
            LineOutcome::NoSolution {
                board: line.to_string(),
                states_tested: result.states_tested,
            }
        };
        outcomes.push(outcome);
    }

    let (mean_moves, mean_states_tested) = if solved > 0 {
        (
            Some(total_moves as f64 / solved as f64),
            Some(total_tested as f64 / solved as f64),
        )
    } else {
        (None, None)
    };

    BatchReport {
        outcomes,
        solved,
        mean_moves,
        mean_states_tested,
    }
}
