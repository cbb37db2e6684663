//! Perfect-play tic-tac-toe.
//!
//! A board state tracker and an alpha-beta minimax agent that always finds
//! the optimal move on the 3x3 grid.
//!
//! # Architecture
//!
//! - **Board**: grid state, move history, legal moves, win/draw detection
//! - **Rules**: pure win and draw predicates the board delegates to
//! - **Agent**: exhaustive alpha-beta search over cloned boards
//! - **Game**: turn alternation for agent-vs-agent play
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{AlphaBetaAgent, Board, Player, Position};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new();
//! board.place_at(0, 0, Player::X)?;
//! board.place_at(1, 1, Player::O)?;
//! board.place_at(0, 1, Player::X)?;
//! board.place_at(2, 2, Player::O)?;
//!
//! let agent = AlphaBetaAgent::new(Player::X);
//! assert_eq!(agent.select_move(&board)?, Position::new(0, 2).unwrap());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agent;
mod board;
mod error;
mod game;
mod types;

// Public modules
pub mod invariants;
pub mod rules;

// Crate-level exports - Core types
pub use types::{DIMENSION, Player, Position, Square};

// Crate-level exports - Board
pub use board::Board;

// Crate-level exports - Search
pub use agent::{AlphaBetaAgent, SearchResult, WIN_SCORE};

// Crate-level exports - Game driver
pub use game::{Game, GameStatus};

// Crate-level exports - Errors
pub use error::{MoveError, SearchError};
