//! Verify command - check the pruned search against plain minimax
//!
//! Every reachable board is solved twice, once with alpha-beta and once
//! without cutoffs. The values must agree, and the move chosen by the pruned
//! search must be one of the optimal moves.

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    cli::output::{create_position_progress, format_number, print_kv, print_section},
    search::{self, MoveOrder, SearchConfig},
    tictactoe::Board,
};

#[derive(Parser, Debug)]
#[command(about = "Verify pruned search against exhaustive minimax on every reachable board")]
pub struct VerifyArgs {
    /// Move enumeration order for both searches
    #[arg(long, value_enum, default_value = "row-major")]
    pub order: MoveOrder,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Totals gathered over a verification run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct VerifySummary {
    pub positions: u64,
    pub terminal: u64,
    pub pruned_nodes: u64,
    pub exhaustive_nodes: u64,
    pub cutoffs: u64,
    pub value_mismatches: u64,
    pub suboptimal_moves: u64,
}

/// Solve `boards` with and without pruning and compare the results.
pub fn verify_boards<'a>(
    boards: impl IntoIterator<Item = &'a Board>,
    order: MoveOrder,
    mut on_board: impl FnMut(&Board),
) -> VerifySummary {
    let pruned = SearchConfig::new().with_move_order(order);
    let exhaustive = SearchConfig::exhaustive().with_move_order(order);
    let mut summary = VerifySummary::default();

    for board in boards {
        summary.positions += 1;

        if board.is_terminal() {
            summary.terminal += 1;
            on_board(board);
            continue;
        }

        let fast = search::search(board, &pruned);
        let slow = search::search(board, &exhaustive);
        summary.pruned_nodes += fast.stats.nodes;
        summary.exhaustive_nodes += slow.stats.nodes;
        summary.cutoffs += fast.stats.cutoffs;

        if fast.value != slow.value {
            summary.value_mismatches += 1;
            tracing::error!(
                board = %board.encode(),
                pruned = fast.value,
                exhaustive = slow.value,
                "value mismatch"
            );
        }

        let optimal = search::optimal_moves(board);
        if !fast.best_move.is_some_and(|mv| optimal.contains(&mv)) {
            summary.suboptimal_moves += 1;
            tracing::error!(
                board = %board.encode(),
                chosen = ?fast.best_move,
                ?optimal,
                "pruned search chose a suboptimal move"
            );
        }

        on_board(board);
    }

    summary
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let boards = Board::reachable_boards();
    tracing::info!(positions = boards.len(), order = args.order.as_str(), "verifying");

    let pb = if args.no_progress {
        None
    } else {
        Some(create_position_progress(boards.len() as u64)?)
    };

    let summary = verify_boards(&boards, args.order, |board| {
        if let Some(pb) = &pb {
            pb.set_message(board.encode());
            pb.inc(1);
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    print_section("Verification");
    print_kv("Positions", &format_number(summary.positions));
    print_kv("Terminal", &format_number(summary.terminal));
    print_kv("Nodes (pruned)", &format_number(summary.pruned_nodes));
    print_kv("Nodes (exhaustive)", &format_number(summary.exhaustive_nodes));
    print_kv("Cutoffs", &format_number(summary.cutoffs));
    if summary.exhaustive_nodes > 0 {
        let saved = 100.0 * (1.0 - summary.pruned_nodes as f64 / summary.exhaustive_nodes as f64);
        print_kv("Nodes saved", &format!("{saved:.1}%"));
    }
    print_kv("Value mismatches", &summary.value_mismatches.to_string());
    print_kv("Suboptimal moves", &summary.suboptimal_moves.to_string());

    if summary.value_mismatches > 0 || summary.suboptimal_moves > 0 {
        bail!(
            "verification failed: {} value mismatches, {} suboptimal moves",
            summary.value_mismatches,
            summary.suboptimal_moves
        );
    }

    println!("\nAll positions agree.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_sample_positions() {
        let boards: Vec<Board> = Board::reachable_boards().into_iter().step_by(97).collect();
        let mut seen = 0;
        let summary = verify_boards(&boards, MoveOrder::CenterFirst, |_| seen += 1);

        assert_eq!(summary.positions, boards.len() as u64);
        assert_eq!(seen, boards.len());
        assert_eq!(summary.value_mismatches, 0);
        assert_eq!(summary.suboptimal_moves, 0);
        assert!(summary.pruned_nodes <= summary.exhaustive_nodes);
    }
}
