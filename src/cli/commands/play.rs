//! Play command - run one game between two agents

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    agents::{self, AgentKind},
    cli::output::{print_board, print_kv, print_section},
    tictactoe::{Board, GameOutcome, PlayedMove},
};

#[derive(Parser, Debug)]
#[command(about = "Play one game between two agents")]
pub struct PlayArgs {
    /// Agent playing X
    #[arg(long, value_enum, default_value = "minimax")]
    pub x: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum, default_value = "minimax")]
    pub o: AgentKind,

    /// Random seed for random agents (O uses seed + 1)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from this board instead of the empty one
    #[arg(long)]
    pub from: Option<String>,

    /// Print the game record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PlayReport {
    start: String,
    moves: Vec<PlayedMove>,
    outcome: Option<GameOutcome>,
    final_board: String,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let start = match &args.from {
        Some(s) => Board::from_string(s)?,
        None => Board::new(),
    };

    let mut x = args.x.into_agent(format!("{:?} (X)", args.x), args.seed);
    let mut o = args
        .o
        .into_agent(format!("{:?} (O)", args.o), args.seed.map(|s| s.wrapping_add(1)));

    tracing::info!(x = x.name(), o = o.name(), start = %start.encode(), "starting game");
    let game = agents::play_from(start, x.as_mut(), o.as_mut())?;

    if args.json {
        let report = PlayReport {
            start: start.encode(),
            moves: game.moves.clone(),
            outcome: game.outcome,
            final_board: game.current_board().encode(),
        };
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
        return Ok(());
    }

    print_section(&format!("{} vs {}", x.name(), o.name()));
    let boards = game.boards()?;
    print_board(&boards[0]);

    for (played, board) in game.moves.iter().zip(boards.iter().skip(1)) {
        println!("\n  {} plays {}", played.player, played.mv);
        print_board(board);
    }

    println!();
    let result = match game.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    print_kv("Result", &result);

    Ok(())
}
