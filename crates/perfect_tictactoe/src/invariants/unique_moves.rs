//! Unique moves invariant: no coordinate is played twice.

use super::Invariant;
use crate::Board;

/// Invariant: Every position appears at most once in the move history.
pub struct UniqueMovesInvariant;

impl Invariant<Board> for UniqueMovesInvariant {
    fn holds(board: &Board) -> bool {
        let moves = board.moves();
        moves
            .iter()
            .enumerate()
            .all(|(i, pos)| !moves[i + 1..].contains(pos))
    }

    fn description() -> &'static str {
        "No position appears twice in the move history"
    }
}
