//! Board reachability checks

use std::collections::{HashSet, VecDeque};

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};

impl Board {
    /// Check that the board can arise from the empty board under alternating
    /// play with X moving first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when X is not level with or
    /// exactly one ahead of O, and [`crate::Error::UnreachableBoard`] when the
    /// completed lines are inconsistent with the move counts.
    pub fn validate(&self) -> crate::Result<()> {
        let count = self.count_pieces();

        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        let unreachable = |reason: &str| crate::Error::UnreachableBoard {
            board: self.encode(),
            reason: reason.to_string(),
        };

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return Err(unreachable("both players have a completed line"));
        }

        // The winner must have made the last move.
        if x_wins && count.x != count.o + 1 {
            return Err(unreachable("O moved after X completed a line"));
        }
        if o_wins && count.x != count.o {
            return Err(unreachable("X moved after O completed a line"));
        }

        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return Err(unreachable(
                    "completed lines do not share the cell of the final move",
                ));
            }
        }

        Ok(())
    }

    /// Check if the board passes [`Board::validate`]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check if all completed lines for a player share at least one cell.
    ///
    /// Several lines can only be completed together by a single final move,
    /// which must lie on each of them.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let lines = LineAnalyzer::completed_lines(self.rows(), player);
        if lines.len() < 2 {
            return true;
        }

        lines[0]
            .iter()
            .any(|cell| lines[1..].iter().all(|line| line.contains(cell)))
    }

    /// Every board reachable from the empty board through legal play,
    /// terminal boards included, in breadth-first order
    pub fn reachable_boards() -> Vec<Board> {
        let root = Board::new();
        let mut seen = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        let mut boards = Vec::new();

        while let Some(board) = queue.pop_front() {
            boards.push(board);
            if board.is_terminal() {
                continue;
            }

            for mv in board.legal_moves() {
                if let Ok(next) = board.apply_move(mv) {
                    if seen.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        boards
    }
}
