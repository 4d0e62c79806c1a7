//! Winning line analysis for Tic-Tac-Toe

use super::board::{Cell, Player, SIZE};

/// The 8 winning lines as (row, col) triples, in scan order
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

type Grid = [[Cell; SIZE]; SIZE];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The mark shared by all three cells of a line, if it is fully claimed
    pub fn line_owner(cells: &Grid, line: &[(usize, usize); 3]) -> Option<Player> {
        let [(r0, c0), (r1, c1), (r2, c2)] = *line;
        let first = cells[r0][c0];
        if first != Cell::Empty && cells[r1][c1] == first && cells[r2][c2] == first {
            first.to_player()
        } else {
            None
        }
    }

    /// Owner of the first completed line in scan order (rows, columns,
    /// diagonals)
    pub fn first_completed_line(cells: &Grid) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }

    /// Check if a player has won by having three in a row
    pub fn has_won(cells: &Grid, player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line) == Some(player))
    }

    /// All lines completed by the player
    pub fn completed_lines(cells: &Grid, player: Player) -> Vec<[(usize, usize); 3]> {
        WINNING_LINES
            .iter()
            .filter(|line| Self::line_owner(cells, line) == Some(player))
            .copied()
            .collect()
    }
}
