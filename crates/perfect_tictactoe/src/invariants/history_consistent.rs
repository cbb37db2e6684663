//! History consistency invariant: history matches occupied squares.

use super::Invariant;
use crate::{Board, Square};

/// Invariant: History length equals number of occupied squares, and every
/// recorded move points at an occupied square.
///
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Board> for HistoryConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let occupied_count = board
            .squares()
            .iter()
            .flatten()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied_count == board.moves().len() && board.moves().iter().all(|&pos| !board.is_empty(pos))
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
