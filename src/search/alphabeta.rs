//! Minimax with alpha-beta pruning.
//!
//! Two mutually recursive procedures, [`AlphaBeta::maximize`] for X and
//! [`AlphaBeta::minimize`] for O, walk the full game tree depth-first. Values
//! are always from X's perspective. Alpha is the best value X is already
//! assured of along the current path, beta the best value O is assured of;
//! once `alpha >= beta` the remaining siblings cannot affect the root.

use serde::Serialize;

use super::config::SearchConfig;
use crate::tictactoe::{Board, Move, Player};

/// Lower sentinel: below every utility
pub const NEG_INFINITY: i32 = i32::MIN;

/// Upper sentinel: above every utility
pub const INFINITY: i32 = i32::MAX;

/// Value of a node together with the move that achieves it.
///
/// `best_move` is `None` on terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub value: i32,
    pub best_move: Option<Move>,
}

impl Evaluation {
    fn terminal(board: &Board) -> Self {
        Evaluation {
            value: board.utility(),
            best_move: None,
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SearchStats {
    /// Boards visited, root included
    pub nodes: u64,
    /// Times the remaining moves of a node were skipped
    pub cutoffs: u64,
}

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub value: i32,
    pub best_move: Option<Move>,
    pub stats: SearchStats,
}

/// One search over one root. Holds the configuration and the counters.
pub(crate) struct AlphaBeta<'a> {
    config: &'a SearchConfig,
    stats: SearchStats,
}

impl<'a> AlphaBeta<'a> {
    pub(crate) fn new(config: &'a SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search `board` for the player to move with an open window.
    pub(crate) fn run(mut self, board: &Board) -> SearchOutcome {
        let evaluation = match board.current_player() {
            Player::X => self.maximize(board, NEG_INFINITY, INFINITY),
            Player::O => self.minimize(board, NEG_INFINITY, INFINITY),
        };

        SearchOutcome {
            value: evaluation.value,
            best_move: evaluation.best_move,
            stats: self.stats,
        }
    }

    fn maximize(&mut self, board: &Board, mut alpha: i32, beta: i32) -> Evaluation {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return Evaluation::terminal(board);
        }

        let mut best = Evaluation {
            value: NEG_INFINITY,
            best_move: None,
        };

        for mv in self.config.move_order.order(board) {
            let Ok(child) = board.apply_move(mv) else {
                continue;
            };

            let value = self.minimize(&child, alpha, beta).value;
            alpha = alpha.max(value);
            if value > best.value {
                best = Evaluation {
                    value,
                    best_move: Some(mv),
                };
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                tracing::trace!(board = %board.encode(), %mv, alpha, beta, "beta cutoff");
                break;
            }
        }

        best
    }

    fn minimize(&mut self, board: &Board, alpha: i32, mut beta: i32) -> Evaluation {
        self.stats.nodes += 1;
        if board.is_terminal() {
            return Evaluation::terminal(board);
        }

        let mut best = Evaluation {
            value: INFINITY,
            best_move: None,
        };

        for mv in self.config.move_order.order(board) {
            let Ok(child) = board.apply_move(mv) else {
                continue;
            };

            let value = self.maximize(&child, alpha, beta).value;
            beta = beta.min(value);
            if value < best.value {
                best = Evaluation {
                    value,
                    best_move: Some(mv),
                };
            }

            if self.config.pruning && alpha >= beta {
                self.stats.cutoffs += 1;
                tracing::trace!(board = %board.encode(), %mv, alpha, beta, "alpha cutoff");
                break;
            }
        }

        best
    }
}
