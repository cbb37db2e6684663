//! Core domain types for tic-tac-toe.

use crate::MoveError;
use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const DIMENSION: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first by convention).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A (row, column) coordinate on the board, 0-indexed.
///
/// Positions built through [`Position::new`] or deserialized are always
/// within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Coordinates")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; DIMENSION * DIMENSION] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Creates a position, or `None` if it falls outside the grid.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < DIMENSION && col < DIMENSION).then_some(Self { row, col })
    }

    /// Converts the position to its row-major board index (0-8).
    pub fn to_index(self) -> usize {
        self.row * DIMENSION + self.col
    }

    /// Row of this position.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this position.
    pub fn col(self) -> usize {
        self.col
    }
}

/// Unchecked coordinates as they appear on the wire.
#[derive(Deserialize)]
struct Coordinates {
    row: usize,
    col: usize,
}

impl TryFrom<Coordinates> for Position {
    type Error = MoveError;

    fn try_from(Coordinates { row, col }: Coordinates) -> Result<Self, Self::Error> {
        Position::new(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
