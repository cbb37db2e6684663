//! Turn alternation and game status on top of [`Board`].

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{AlphaBetaAgent, Board, MoveError, Player, Position, SearchError, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Tic-tac-toe game: a board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with `first` to move.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Plays `pos` for the side to move and returns the new status.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.place(pos, self.to_move)?;
        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "Board invariants violated after {} played {pos}",
            self.to_move
        );
        self.update_status();
        self.to_move = self.to_move.opponent();

        debug!(%pos, status = %self.status, "Move applied");
        Ok(self.status)
    }

    /// Lets the agents alternate until the game ends.
    ///
    /// `x` moves for [`Player::X`] and `o` for [`Player::O`]; each agent should
    /// be bound to the side it moves for.
    #[instrument(skip_all, fields(first = %self.to_move))]
    pub fn play_out(&mut self, x: &AlphaBetaAgent, o: &AlphaBetaAgent) -> Result<GameStatus, SearchError> {
        debug_assert_eq!(x.player(), Player::X);
        debug_assert_eq!(o.player(), Player::O);

        while !self.status.is_over() {
            let agent = match self.to_move {
                Player::X => x,
                Player::O => o,
            };
            let pos = agent.select_move(&self.board)?;
            info!(player = %self.to_move, %pos, "Agent played");
            self.make_move(pos)?;
        }

        info!(status = %self.status, moves = self.board.moves().len(), "Game over");
        Ok(self.status)
    }

    fn update_status(&mut self) {
        if let Some(winner) = self.board.winner() {
            self.status = GameStatus::Won(winner);
        } else if rules::is_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
