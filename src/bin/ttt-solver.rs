//! Tic-tac-toe solver CLI
//!
//! - Solve a position and report the optimal move
//! - Evaluate every legal move of a position
//! - Play games between minimax and random agents
//! - Verify the pruned search over every reachable position

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_solver::cli::{self, commands};

#[derive(Parser)]
#[command(name = "ttt-solver")]
#[command(version, about = "Perfect-play tic-tac-toe solver", long_about = None)]
struct Cli {
    /// Log search and game events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    Solve(commands::solve::SolveArgs),

    /// Show the exact value of every legal move
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Play a game between two agents
    Play(commands::play::PlayArgs),

    /// Check alpha-beta against plain minimax on every reachable position
    Verify(commands::verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve(args) => commands::solve::execute(args),
        Commands::Evaluate(args) => commands::evaluate::execute(args),
        Commands::Play(args) => commands::play::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
    }
}
