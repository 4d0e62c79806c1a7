//! Move-selection agents and a simple match driver
//!
//! An [`Agent`] picks a move for whoever is to move on a board. The minimax
//! agent plays perfectly; the random agent is a baseline opponent.

use clap::ValueEnum;
use rand::{SeedableRng, random, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    search::{self, SearchConfig},
    tictactoe::{Board, Game, Move, Player},
};

/// Unified interface for anything that can choose a move
pub trait Agent: Send {
    /// Select a move for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLegalMoves`] if the board is terminal.
    fn select_move(&mut self, board: &Board) -> Result<Move>;

    /// Get the agent's name.
    fn name(&self) -> &str;
}

/// Perfect player backed by the alpha-beta search
#[derive(Debug, Clone)]
pub struct MinimaxAgent {
    name: String,
    config: SearchConfig,
}

impl MinimaxAgent {
    pub fn new(name: String) -> Self {
        Self::with_config(name, SearchConfig::default())
    }

    pub fn with_config(name: String, config: SearchConfig) -> Self {
        Self { name, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        search::search(board, &self.config)
            .best_move
            .ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random legal moves (baseline)
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self::with_seed(name, random())
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Result<Move> {
        if board.is_terminal() {
            return Err(Error::NoLegalMoves);
        }
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoLegalMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Kinds of agent selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum AgentKind {
    Minimax,
    Random,
}

impl AgentKind {
    /// Build a boxed agent of this kind. `seed` only affects random agents.
    pub fn into_agent(self, name: String, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(name)),
            AgentKind::Random => match seed {
                Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
                None => Box::new(RandomAgent::new(name)),
            },
        }
    }
}

/// Play a full game from the empty board, X moving first.
///
/// # Errors
///
/// Propagates agent failures and any illegal move an agent returns.
pub fn play_match(x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    play_from(Board::new(), x, o)
}

/// Play a game to completion from `start`.
///
/// # Errors
///
/// Propagates agent failures and any illegal move an agent returns.
pub fn play_from(start: Board, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
    let mut game = Game::from_board(start);

    while !game.is_over() {
        let board = game.current_board();
        let agent: &mut dyn Agent = match board.current_player() {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = agent.select_move(&board)?;
        tracing::debug!(agent = agent.name(), %mv, "agent selected move");
        game.play(mv)?;
    }

    tracing::debug!(outcome = ?game.outcome, moves = game.moves.len(), "game finished");
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::GameOutcome;

    #[test]
    fn test_minimax_self_play_draws() {
        let mut x = MinimaxAgent::new("X".to_string());
        let mut o = MinimaxAgent::new("O".to_string());

        let game = play_match(&mut x, &mut o).unwrap();
        assert_eq!(game.outcome, Some(GameOutcome::Draw));
        assert_eq!(game.moves.len(), 9);
    }

    #[test]
    fn test_random_agent_is_deterministic_with_seed() {
        let play = |seed| {
            let mut x = RandomAgent::with_seed("a".to_string(), seed);
            let mut o = RandomAgent::with_seed("b".to_string(), seed + 1);
            play_match(&mut x, &mut o).unwrap().moves
        };
        assert_eq!(play(7), play(7));
    }

    #[test]
    fn test_agents_refuse_terminal_boards() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let mut minimax = MinimaxAgent::new("m".to_string());
        let mut random = RandomAgent::with_seed("r".to_string(), 1);

        assert!(matches!(
            minimax.select_move(&board),
            Err(Error::NoLegalMoves)
        ));
        assert!(matches!(random.select_move(&board), Err(Error::NoLegalMoves)));
    }

    #[test]
    fn test_minimax_never_loses_to_random_play() {
        for seed in 0..20 {
            let mut x = MinimaxAgent::new("minimax".to_string());
            let mut o = RandomAgent::with_seed("random".to_string(), seed);
            let game = play_match(&mut x, &mut o).unwrap();
            assert_ne!(
                game.outcome,
                Some(GameOutcome::Win(Player::O)),
                "minimax lost as X with seed {seed}"
            );
        }
    }

    #[test]
    fn test_agent_kind_builds_named_agents() {
        let agent = AgentKind::Random.into_agent("rnd".to_string(), Some(3));
        assert_eq!(agent.name(), "rnd");
        let agent = AgentKind::Minimax.into_agent("mm".to_string(), None);
        assert_eq!(agent.name(), "mm");
    }
}
