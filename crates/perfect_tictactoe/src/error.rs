//! Error types for board mutation and search.

use crate::Position;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The coordinates fall outside the grid.
    #[display("Coordinates ({}, {}) are out of bounds", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Error that can occur when asking the agent for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// The board already has a winner or no empty squares.
    #[display("Cannot search a terminal board")]
    #[from(ignore)]
    TerminalBoard,

    /// The chosen move could not be applied.
    ///
    /// The agent only picks empty squares, so this surfaces moves supplied
    /// by the caller that the board rejects.
    #[display("Illegal move during play: {}", _0)]
    IllegalMove(MoveError),
}
