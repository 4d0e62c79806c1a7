//! Evaluate command - exact value of every legal move

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{describe_value, print_board, print_kv, print_section, print_subsection},
    search,
    tictactoe::{Board, Move, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax value of every legal move")]
pub struct EvaluateArgs {
    /// Board as 9 cells of X, O or '.', rows optionally split by '/'
    pub board: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct MoveValue {
    #[serde(rename = "move")]
    mv: Move,
    value: i32,
    optimal: bool,
}

#[derive(Serialize)]
struct EvaluateReport {
    board: String,
    to_move: Player,
    moves: Vec<MoveValue>,
    optimal_moves: Vec<Move>,
}

pub fn execute(args: EvaluateArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let optimal = search::optimal_moves(&board);
    let moves: Vec<MoveValue> = search::evaluate_moves(&board)
        .into_iter()
        .map(|(mv, value)| MoveValue {
            mv,
            value,
            optimal: optimal.contains(&mv),
        })
        .collect();

    if args.json {
        let report = EvaluateReport {
            board: board.encode(),
            to_move: board.current_player(),
            moves,
            optimal_moves: optimal,
        };
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
        return Ok(());
    }

    print_section("Move Evaluation");
    print_board(&board);

    if moves.is_empty() {
        println!("\n  (position is terminal)");
        return Ok(());
    }

    println!();
    print_kv("To move", &board.current_player().to_string());

    print_subsection("Moves (values from X's perspective)");
    for entry in &moves {
        let marker = if entry.optimal { "*" } else { " " };
        println!(
            "  {marker} {:8} {:>2}  {}",
            entry.mv.to_string(),
            entry.value,
            describe_value(entry.value)
        );
    }

    let optimal_list: Vec<String> = optimal.iter().map(Move::to_string).collect();
    println!();
    print_kv("Optimal moves", &optimal_list.join(", "));

    Ok(())
}
