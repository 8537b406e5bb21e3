//! Thin entry point; the CLI surface lives in `puzzle_search::cli`.

use anyhow::Result;
use clap::Parser;
use puzzle_search::cli::{execute_batch, execute_solve, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => execute_solve(args),
        Commands::Batch(args) => execute_batch(args),
    }
}
