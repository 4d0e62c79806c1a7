//! Solve command - find the best move for a position

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe_value, format_number, print_board, print_kv, print_section},
    search::{self, MoveOrder, SearchConfig, SearchStats},
    tictactoe::{Board, GameOutcome, Move, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for the player to move")]
pub struct SolveArgs {
    /// Board as 9 cells of X, O or '.', rows optionally split by '/'
    pub board: String,

    /// Disable alpha-beta cutoffs (plain minimax)
    #[arg(long)]
    pub no_pruning: bool,

    /// Move enumeration order
    #[arg(long, value_enum, default_value = "row-major")]
    pub order: MoveOrder,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct SolveReport {
    board: String,
    to_move: Player,
    outcome: Option<GameOutcome>,
    best_move: Option<Move>,
    value: i32,
    stats: SearchStats,
    config: SearchConfig,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let config = SearchConfig::new()
        .with_pruning(!args.no_pruning)
        .with_move_order(args.order);

    let outcome = search::search(&board, &config);

    if args.json {
        let report = SolveReport {
            board: board.encode(),
            to_move: board.current_player(),
            outcome: board.outcome(),
            best_move: outcome.best_move,
            value: outcome.value,
            stats: outcome.stats,
            config,
        };
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
        return Ok(());
    }

    print_section("Solve");
    print_board(&board);
    println!();

    if let Some(result) = board.outcome() {
        let text = match result {
            GameOutcome::Win(player) => format!("{player} has won"),
            GameOutcome::Draw => "draw".to_string(),
        };
        print_kv("Game over", &text);
        return Ok(());
    }

    print_kv("To move", &board.current_player().to_string());
    if let Some(mv) = outcome.best_move {
        print_kv("Best move", &mv.to_string());
    }
    print_kv(
        "Value",
        &format!("{} ({})", outcome.value, describe_value(outcome.value)),
    );
    print_kv("Nodes searched", &format_number(outcome.stats.nodes));
    print_kv("Cutoffs", &format_number(outcome.stats.cutoffs));
    print_kv("Move order", config.move_order.as_str());

    Ok(())
}
