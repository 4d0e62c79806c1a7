//! Search configuration.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Board, Move};

/// Order in which the search enumerates legal moves.
///
/// The order never changes a position's value. It changes how many nodes
/// alpha-beta can skip and which move is reported among equally good ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MoveOrder {
    /// Top-left to bottom-right, row by row
    #[default]
    RowMajor,
    /// Center, then corners, then edges (row-major within each group)
    CenterFirst,
}

impl MoveOrder {
    /// Legal moves of `board` in this order
    pub fn order(self, board: &Board) -> Vec<Move> {
        let mut moves = board.legal_moves();
        if self == MoveOrder::CenterFirst {
            moves.sort_by_key(|&mv| center_first_rank(mv));
        }
        moves
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveOrder::RowMajor => "row-major",
            MoveOrder::CenterFirst => "center-first",
        }
    }
}

fn center_first_rank(mv: Move) -> u8 {
    match (mv.row, mv.col) {
        (1, 1) => 0,
        (0 | 2, 0 | 2) => 1,
        _ => 2,
    }
}

/// Configuration for a search.
///
/// # Examples
///
/// ```
/// use tictactoe_solver::search::{MoveOrder, SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_pruning(false)
///     .with_move_order(MoveOrder::CenterFirst);
/// assert!(!config.pruning);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Whether alpha-beta cutoffs are taken
    pub pruning: bool,
    /// Move enumeration order
    pub move_order: MoveOrder,
}

impl SearchConfig {
    /// Alpha-beta search in row-major order
    pub fn new() -> Self {
        Self {
            pruning: true,
            move_order: MoveOrder::default(),
        }
    }

    /// Plain minimax: the same traversal with every cutoff disabled
    pub fn exhaustive() -> Self {
        Self::new().with_pruning(false)
    }

    /// Enable or disable alpha-beta cutoffs.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Set the move enumeration order.
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}
