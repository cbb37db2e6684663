//! Single winner invariant: both players never own complete lines.

use super::Invariant;
use crate::rules::{line_owner, lines};
use crate::{Board, Player};

/// Invariant: Complete lines never belong to both players at once.
///
/// Well-formed play stops at the first completed line, so at most one
/// player can ever own one. Scans every line regardless of move count.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = lines().filter_map(|line| line_owner(board, line));
        match owners.next() {
            Some(first) => owners.all(|owner: Player| owner == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player owns a complete line"
    }
}
