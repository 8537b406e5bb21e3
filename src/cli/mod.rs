//! Command-line interface for the Eight Puzzle solver.
//!
//! Two subcommands: `solve` runs one board, `batch` runs every board in
//! a file and reports aggregate statistics.

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::batch::{run_batch, LineOutcome};
use crate::board::Board;
use crate::search::{HeuristicKind, SearchConfig, SearchRunner, Strategy};

#[derive(Parser)]
#[command(name = "puzzle", version, about = "Eight Puzzle state-space search", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve a single board
    Solve(SolveArgs),

    /// Solve every board listed in a file (one per line) and aggregate
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct SolveArgs {
    /// Board as a 9-digit permutation of 0-8, row-major, 0 is the blank
    pub board: String,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Print the move-by-move solution path
    #[arg(long)]
    pub show_moves: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// File with one board string per line
    pub file: String,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Search options shared by both subcommands.
#[derive(Args)]
pub struct SearchArgs {
    /// Search strategy: random, BFS, DFS, Greedy, A*
    #[arg(short, long, default_value = "BFS")]
    pub strategy: String,

    /// Inclusive depth limit; -1 for unlimited
    #[arg(short, long, default_value_t = -1, allow_hyphen_values = true)]
    pub depth_limit: i64,

    /// Heuristic for Greedy and A*: h0, h1, h2
    #[arg(long, default_value = "h2")]
    pub heuristic: String,

    /// Seed for the random strategy
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SearchArgs {
    /// Maps the external option surface (including the -1 sentinel) onto
    /// a [`SearchConfig`].
    pub fn to_config(&self) -> Result<SearchConfig> {
        let strategy: Strategy = self.strategy.parse()?;
        let heuristic: HeuristicKind = self.heuristic.parse()?;

        let mut config = SearchConfig::default()
            .with_strategy(strategy)
            .with_heuristic(heuristic.resolve());
        if self.depth_limit >= 0 {
            config = config.with_depth_limit(
                u32::try_from(self.depth_limit).context("depth limit out of range")?,
            );
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

pub fn execute_solve(args: SolveArgs) -> Result<()> {
    let config = args.search.to_config()?;
    let board = Board::from_digits(&args.board)?;

    let started = Instant::now();
    let result = SearchRunner::run(&config, &board);
    let elapsed = started.elapsed().as_secs_f64();

    println!(
        "{}: {:.5} seconds, {} states tested",
        config.strategy, elapsed, result.states_tested
    );

    match result.solution {
        Some(solution) => {
            println!("Found a solution requiring {} moves.", solution.move_count());
            if args.show_moves {
                print!("{solution}");
            }
        }
        None if result.cancelled => println!("Search terminated, no solution."),
        None => println!("Failed to find a solution."),
    }
    Ok(())
}

pub fn execute_batch(args: BatchArgs) -> Result<()> {
    let config = args.search.to_config()?;
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read board file '{}'", args.file))?;

    let report = run_batch(contents.lines(), &config);

    for outcome in &report.outcomes {
        match outcome {
            LineOutcome::Solved {
                board,
                moves,
                states_tested,
            } => println!("{board}: {moves} moves, {states_tested} states tested"),
            LineOutcome::NoSolution { board, .. } => println!("{board}: no solution"),
            LineOutcome::Cancelled { board, .. } => {
                println!("{board}: search terminated, no solution")
            }
            LineOutcome::Invalid { line, message } => println!("{line}: {message}"),
        }
    }

    if report.solved > 0 {
        println!();
        println!("solved {} puzzles", report.solved);
        println!(
            "averages: {:.2} moves, {:.2} states tested",
            report.mean_moves.unwrap_or(0.0),
            report.mean_states_tested.unwrap_or(0.0)
        );
    } else {
        println!("solved 0 puzzles");
    }
    Ok(())
}
