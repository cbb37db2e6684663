//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, DIMENSION};
use tracing::instrument;

/// Checks if every square has been played.
#[instrument(level = "trace", skip_all)]
pub fn is_full(board: &Board) -> bool {
    board.moves().len() == DIMENSION * DIMENSION
}

/// A full board with no winner is a draw.
#[instrument(level = "trace", skip_all)]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
