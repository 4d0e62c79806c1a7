//! Shared helpers for the solver integration tests.

#![allow(dead_code)]

use tictactoe_solver::Board;

/// Parse a board literal, panicking on malformed input.
pub fn board(s: &str) -> Board {
    Board::from_string(s).unwrap_or_else(|e| panic!("bad board literal {s:?}: {e}"))
}

/// Play moves chosen by `picks` (taken modulo the number of legal moves)
/// from the empty board, stopping once the game is over.
pub fn playout(picks: &[usize]) -> Board {
    let mut board = Board::new();
    for &pick in picks {
        if board.is_terminal() {
            break;
        }
        let moves = board.legal_moves();
        board = board.apply_move(moves[pick % moves.len()]).unwrap();
    }
    board
}
