//! Adversarial search: minimax with alpha-beta pruning over the full game tree

mod alphabeta;
pub mod analysis;
pub mod config;

pub use alphabeta::{Evaluation, INFINITY, NEG_INFINITY, SearchOutcome, SearchStats};
pub use analysis::{evaluate_moves, minimax_value, optimal_moves};
pub use config::{MoveOrder, SearchConfig};

use crate::tictactoe::{Board, Move};

/// Search `board` for the player to move.
///
/// On a terminal board the outcome carries the board's utility and no move.
pub fn search(board: &Board, config: &SearchConfig) -> SearchOutcome {
    let outcome = alphabeta::AlphaBeta::new(config).run(board);

    tracing::debug!(
        board = %board.encode(),
        value = outcome.value,
        best_move = ?outcome.best_move,
        nodes = outcome.stats.nodes,
        cutoffs = outcome.stats.cutoffs,
        pruning = config.pruning,
        order = config.move_order.as_str(),
        "search finished"
    );

    outcome
}

/// The optimal move for the player to move, `None` when the game is over.
///
/// Uses alpha-beta with row-major enumeration; among equally good moves the
/// first one in that order is returned.
///
/// # Examples
///
/// ```
/// use tictactoe_solver::{Board, Move, search::best_move};
///
/// let board = Board::from_string("XX. .O. ..O").unwrap();
/// assert_eq!(best_move(&board), Some(Move::new(0, 2)));
/// ```
pub fn best_move(board: &Board) -> Option<Move> {
    if board.is_terminal() {
        return None;
    }
    search(board, &SearchConfig::default()).best_move
}
