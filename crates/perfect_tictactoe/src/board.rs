//! Board state: grid of squares plus the ordered move history.

use crate::invariants::{HistoryConsistentInvariant, InvariantSet, InvariantViolation, UniqueMovesInvariant};
use crate::{DIMENSION, MoveError, Player, Position, Square, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Cloning yields an independent copy of both the grid and the history,
/// so the search can mutate hypothetical futures freely.
///
/// Deserialization rejects snapshots whose history disagrees with the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot")]
pub struct Board {
    /// Squares indexed by `[row][col]`.
    grid: [[Square; DIMENSION]; DIMENSION],
    /// Positions played, oldest first.
    moves: Vec<Position>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.grid[pos.row()][pos.col()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `player`'s mark at `pos` and records the move.
    ///
    /// Fails without touching the board if the square is taken.
    #[instrument(level = "debug", skip(self), fields(move_number = self.moves.len() + 1))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        let square = self
            .grid
            .get_mut(pos.row())
            .and_then(|row| row.get_mut(pos.col()))
            .ok_or(MoveError::OutOfBounds {
                row: pos.row(),
                col: pos.col(),
            })?;

        if *square != Square::Empty {
            debug!(%pos, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        *square = Square::Occupied(player);
        self.moves.push(pos);
        Ok(())
    }

    /// Places `player`'s mark at raw `(row, col)` coordinates.
    pub fn place_at(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let pos = Position::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos, player)
    }

    /// Returns every empty position in row-major order.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Returns the winner, if any line is complete.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every square has been played.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if the game on this board is over.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Returns the move history.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Position> {
        self.moves.last().copied()
    }

    /// Returns the grid rows, top to bottom.
    pub fn squares(&self) -> &[[Square; DIMENSION]; DIMENSION] {
        &self.grid
    }

    /// Builds a board without validation, for corrupting state in tests.
    #[cfg(test)]
    pub(crate) fn from_parts(grid: [[Square; DIMENSION]; DIMENSION], moves: Vec<Position>) -> Self {
        Self { grid, moves }
    }
}

/// Storage checks a deserialized board must pass.
type SnapshotInvariants = (HistoryConsistentInvariant, UniqueMovesInvariant);

/// Serialized form of a [`Board`], validated before it becomes one.
#[derive(Deserialize)]
struct BoardSnapshot {
    grid: [[Square; DIMENSION]; DIMENSION],
    moves: Vec<Position>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = InvariantViolation;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let board = Self {
            grid: snapshot.grid,
            moves: snapshot.moves,
        };
        SnapshotInvariants::check_all(&board).map_err(|violations| {
            let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(board)
    }
}
