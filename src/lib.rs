//! Perfect-play Tic-Tac-Toe solver
//!
//! This crate provides:
//! - Board representation with state queries and immutable transitions
//! - Minimax search with alpha-beta pruning over the complete game tree
//! - Exact per-move values and the set of optimal moves
//! - Agents and a match driver for engine self-play and baselines
//! - A command-line front end (`ttt-solver`)

pub mod agents;
pub mod cli;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchConfig, best_move};
pub use tictactoe::{Board, Cell, GameOutcome, Move, Player};
