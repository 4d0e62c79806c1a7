//! Board representation, state queries and transitions

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the grid
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move: zero-based row and column of the cell to claim.
///
/// Coordinates are not checked on construction; [`Board::apply_move`] rejects
/// anything outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Build a move from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Move::new(index / SIZE, index % SIZE))
    }

    /// Row-major cell index of this move
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Whether both coordinates lie on the grid
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Move::new(row, col)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// A 3x3 board.
///
/// Boards are plain `Copy` values: every transition returns a fresh board and
/// the source is never modified. The player to move is not stored; it follows
/// from the number of empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// The initial, all-empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board directly from its rows.
    ///
    /// No reachability check is made; use [`Board::validate`] for that.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Create a board from a string of 9 cell characters.
    ///
    /// Whitespace, `/` and `|` are ignored, so `"XO./.X./..O"` and
    /// `"XO. .X. ..O"` are both accepted. The parsed board must be reachable
    /// under alternating play with X first.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 cell characters are present
    /// - Any character is not a valid cell representation
    /// - The board fails [`Board::validate`]
    pub fn from_string(s: &str) -> crate::Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// All rows of the grid
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Get the cell at a coordinate, `None` when off the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Get the cell at a row-major index (0-8)
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index / SIZE][index % SIZE]
    }

    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.count_pieces().empty
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Player who has the next turn: X when the empty count is odd, O otherwise
    pub fn current_player(&self) -> Player {
        if self.empty_count() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells in row-major order.
    ///
    /// Terminality is not considered: a won board still lists its empty cells.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    /// Whether the move names an empty cell on the grid
    pub fn is_legal(&self, mv: Move) -> bool {
        self.get(mv.row, mv.col) == Some(Cell::Empty)
    }

    /// Return the board that results from the current player claiming `mv`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] when the coordinates are off the
    /// grid or the cell is already occupied.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> crate::Result<Board> {
        if !self.is_legal(mv) {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = self.current_player().to_cell();
        Ok(next)
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// The owner of the first completed line, scanning rows, then columns,
    /// then diagonals
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::first_completed_line(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// Payoff from X's perspective: +1 X won, -1 O won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards; an unfinished board yields 0.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Outcome of the game, `None` while it is still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner() {
            Some(player) => Some(GameOutcome::Win(player)),
            None if self.empty_count() == 0 => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Compact 9-character encoding, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.current_player(), Player::X);
        assert_eq!(board.empty_count(), 9);
        assert!(board.rows().iter().flatten().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();

        let next = board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(next.get(1, 1), Some(Cell::X));
        assert_eq!(next.current_player(), Player::O);
        assert_eq!(board, Board::new(), "source board must be untouched");

        let err = next.apply_move(Move::new(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let board = Board::new();
        assert!(matches!(
            board.apply_move(Move::new(3, 0)),
            Err(crate::Error::InvalidMove { row: 3, col: 0 })
        ));
        assert!(matches!(
            board.apply_move(Move::new(0, 7)),
            Err(crate::Error::InvalidMove { row: 0, col: 7 })
        ));
    }

    #[test]
    fn test_legal_moves_row_major() {
        let mut board = Board::new();
        let all: Vec<usize> = board.legal_moves().into_iter().map(Move::index).collect();
        assert_eq!(all, (0..9).collect::<Vec<_>>());

        board = board.apply_move(Move::new(0, 0)).unwrap();
        board = board.apply_move(Move::new(1, 1)).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
        assert_eq!(moves[0], Move::new(0, 1));
    }

    #[test]
    fn test_legal_moves_full_board() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert!(board.legal_moves().is_empty());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_current_player_parity() {
        let board = Board::from_string("X........").unwrap();
        assert_eq!(board.current_player(), Player::O);

        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.current_player(), Player::X);
    }

    #[test]
    fn test_win_detection_row() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 1);
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_win_detection_column() {
        let board = Board::from_string("XO./XO./.OX").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_win_detection_anti_diagonal() {
        let board = Board::from_string("XXO/XO./O..").unwrap();
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        assert_eq!(board.winner(), None);
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_in_progress_board() {
        let board = Board::from_string("X...O....").unwrap();
        assert!(!board.is_terminal());
        assert_eq!(board.outcome(), None);
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            Board::from_string("OO......."),
            Err(crate::Error::InvalidPieceCounts { .. })
        ));
    }

    #[test]
    fn test_encode_and_display() {
        let board: Board = "XOX/.O./X..".parse().unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }

    #[test]
    fn test_move_index_conversions() {
        assert_eq!(Move::from_index(5), Some(Move::new(1, 2)));
        assert_eq!(Move::from_index(9), None);
        assert_eq!(Move::new(2, 1).index(), 7);
        assert_eq!(Move::from((0, 2)), Move::new(0, 2));
        assert_eq!(Move::new(1, 2).to_string(), "(1, 2)");
        assert!(!Move::new(0, 3).in_bounds());
    }
}
