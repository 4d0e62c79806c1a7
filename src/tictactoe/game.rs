//! In-memory record of a single game

use serde::{Deserialize, Serialize};

use super::board::{Board, GameOutcome, Move, Player};

/// A move together with the player who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayedMove {
    pub mv: Move,
    pub player: Player,
}

/// A game in progress or finished, with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<PlayedMove>,
    pub outcome: Option<GameOutcome>,
    current: Board,
}

impl Game {
    /// Start a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start a game from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: initial.outcome(),
            current: initial,
        }
    }

    /// Play a move for whoever is to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has finished and
    /// [`crate::Error::InvalidMove`] for an illegal move.
    pub fn play(&mut self, mv: Move) -> crate::Result<()> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let player = self.current.current_player();
        let next = self.current.apply_move(mv)?;

        self.moves.push(PlayedMove { mv, player });
        self.current = next;
        self.outcome = next.outcome();

        tracing::debug!(%player, %mv, board = %next.encode(), "move played");
        Ok(())
    }

    /// The board after every recorded move
    pub fn current_board(&self) -> Board {
        self.current
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every position of the game, starting with the initial board
    pub fn boards(&self) -> crate::Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        boards.push(board);

        for played in &self.moves {
            board = board.apply_move(played.mv)?;
            boards.push(board);
        }

        Ok(boards)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
