//! Win detection logic for tic-tac-toe.

use crate::{Board, DIMENSION, Player, Position, Square};
use tracing::instrument;

/// Fewest total moves after which any line can be complete.
pub const MIN_MOVES_FOR_WIN: usize = 2 * DIMENSION - 1;

const P: [Position; DIMENSION * DIMENSION] = Position::ALL;

/// Every line on the board in scan order: rows, columns, main diagonal,
/// anti-diagonal.
const LINES: [[Position; DIMENSION]; 2 * DIMENSION + 2] = [
    // Rows
    [P[0], P[1], P[2]],
    [P[3], P[4], P[5]],
    [P[6], P[7], P[8]],
    // Columns
    [P[0], P[3], P[6]],
    [P[1], P[4], P[7]],
    [P[2], P[5], P[8]],
    // Diagonals
    [P[0], P[4], P[8]],
    [P[2], P[4], P[6]],
];

/// Returns every line of the board in the order the winner check scans them.
pub fn lines() -> impl Iterator<Item = [Position; DIMENSION]> {
    LINES.into_iter()
}

/// Returns the player filling every square of `line`, if any.
pub fn line_owner(board: &Board, line: [Position; DIMENSION]) -> Option<Player> {
    let [first, rest @ ..] = line;
    match board.get(first) {
        Square::Occupied(player) if rest.iter().all(|&pos| board.get(pos) == Square::Occupied(player)) => {
            Some(player)
        }
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first uniformly owned line found,
/// `None` otherwise. Boards with fewer than [`MIN_MOVES_FOR_WIN`] moves
/// are not scanned.
#[instrument(level = "trace", skip_all)]
pub fn check_winner(board: &Board) -> Option<Player> {
    if board.moves().len() < MIN_MOVES_FOR_WIN {
        return None;
    }

    lines().find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(moves: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in moves {
            board.place_at(row, col, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[
            (0, 0, Player::X),
            (1, 0, Player::O),
            (0, 1, Player::X),
            (1, 1, Player::O),
            (0, 2, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&[
            (0, 0, Player::X),
            (0, 2, Player::O),
            (1, 1, Player::X),
            (1, 2, Player::O),
            (2, 0, Player::X),
            (2, 2, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[
            (0, 2, Player::O),
            (0, 0, Player::X),
            (1, 1, Player::O),
            (0, 1, Player::X),
            (2, 0, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_short_history_is_not_scanned() {
        // Three in a row without the opponent moving is unreachable in
        // alternating play, so the move-count shortcut ignores it.
        let board = board_from(&[(0, 0, Player::X), (0, 1, Player::X), (0, 2, Player::X)]);
        assert_eq!(check_winner(&board), None);
        assert_eq!(line_owner(&board, [P[0], P[1], P[2]]), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_from(&[
            (0, 0, Player::X),
            (1, 1, Player::O),
            (0, 1, Player::X),
            (2, 2, Player::O),
            (1, 0, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_scan_order() {
        let orders: Vec<usize> = lines().map(|line| line[0].to_index()).collect();
        assert_eq!(orders, vec![0, 3, 6, 0, 1, 2, 0, 2]);
    }
}
