//! Exact move values and the set of optimal moves.

use super::{SearchConfig, alphabeta::AlphaBeta};
use crate::tictactoe::{Board, Move, Player};

/// Value of `board` under plain minimax, with no cutoffs.
pub fn minimax_value(board: &Board) -> i32 {
    AlphaBeta::new(&SearchConfig::exhaustive()).run(board).value
}

/// Evaluate every legal move and return its exact minimax value.
///
/// Values are from X's perspective. Terminal boards yield an empty list.
pub fn evaluate_moves(board: &Board) -> Vec<(Move, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    let config = SearchConfig::default();
    board
        .legal_moves()
        .into_iter()
        .filter_map(|mv| {
            let child = board.apply_move(mv).ok()?;
            Some((mv, AlphaBeta::new(&config).run(&child).value))
        })
        .collect()
}

/// All moves achieving the minimax value for the player to move, row-major.
pub fn optimal_moves(board: &Board) -> Vec<Move> {
    let moves_with_values = evaluate_moves(board);
    let best_value = match board.current_player() {
        Player::X => moves_with_values.iter().map(|&(_, value)| value).max(),
        Player::O => moves_with_values.iter().map(|&(_, value)| value).min(),
    };

    let Some(best_value) = best_value else {
        return Vec::new();
    };

    moves_with_values
        .into_iter()
        .filter(|&(_, value)| value == best_value)
        .map(|(mv, _)| mv)
        .collect()
}
