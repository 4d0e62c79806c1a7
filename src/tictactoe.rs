//! Tic-Tac-Toe rules: board, state queries, transitions and game records

pub mod board;
pub mod game;
pub mod lines;
pub mod validation;

pub use board::{Board, CELL_COUNT, Cell, GameOutcome, Move, Player, SIZE};
pub use game::{Game, PlayedMove};
pub use lines::{LineAnalyzer, WINNING_LINES};
