//! End-to-end scenarios for the alpha-beta agent.

use perfect_tictactoe::{AlphaBetaAgent, Board, Game, GameStatus, Player, Position, SearchError, WIN_SCORE};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn board_from(moves: &[(usize, usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(row, col, player) in moves {
        board.place_at(row, col, player).unwrap();
    }
    board
}

#[test]
fn test_opening_move_preserves_draw() {
    let agent = AlphaBetaAgent::new(Player::X);
    let result = agent.evaluate(&Board::new()).unwrap();

    let corners_and_center = [pos(0, 0), pos(0, 2), pos(1, 1), pos(2, 0), pos(2, 2)];
    assert!(corners_and_center.contains(&result.mv().unwrap()));
    assert_eq!(result.value(), 0);
}

#[test]
fn test_self_play_is_a_draw() {
    for first in [Player::X, Player::O] {
        let mut game = Game::new(first);
        let status = game
            .play_out(&AlphaBetaAgent::new(Player::X), &AlphaBetaAgent::new(Player::O))
            .unwrap();

        assert_eq!(status, GameStatus::Draw, "{first} moving first");
        assert_eq!(game.board().winner(), None);
        assert!(game.board().is_full());
    }
}

#[test]
fn test_completes_own_row() {
    let board = board_from(&[
        (0, 0, Player::X),
        (1, 1, Player::O),
        (0, 1, Player::X),
        (2, 2, Player::O),
    ]);
    let agent = AlphaBetaAgent::new(Player::X);

    let result = agent.evaluate(&board).unwrap();
    assert_eq!(result.mv(), Some(pos(0, 2)));
    // The win lands one ply below the root.
    assert_eq!(result.value(), WIN_SCORE - 1);
    assert_eq!(agent.select_move(&board).unwrap(), pos(0, 2));
}

#[test]
fn test_two_in_a_row_alone_on_the_board() {
    let board = board_from(&[(0, 0, Player::X), (0, 1, Player::X)]);
    let agent = AlphaBetaAgent::new(Player::X);

    assert_eq!(agent.select_move(&board), Ok(pos(0, 2)));

    // Three marks are below the five-move threshold for a win, so the line
    // only counts once two more moves fill the board to five.
    let result = agent.evaluate(&board).unwrap();
    assert_eq!(result.mv(), Some(pos(0, 2)));
    assert_eq!(result.value(), WIN_SCORE - 3);
    assert_eq!(result.depth(), 3);
}

#[test]
fn test_blocks_and_opponent_cannot_win_next() {
    let board = board_from(&[
        (1, 1, Player::X),
        (0, 0, Player::O),
        (2, 2, Player::X),
        (0, 1, Player::O),
    ]);
    let agent = AlphaBetaAgent::new(Player::X);
    let choice = agent.select_move(&board).unwrap();
    assert_eq!(choice, pos(0, 2));

    let mut after = board.clone();
    after.place(choice, Player::X).unwrap();
    for reply in after.legal_moves() {
        let mut next = after.clone();
        next.place(reply, Player::O).unwrap();
        assert_ne!(next.winner(), Some(Player::O), "O wins with {reply}");
    }
}

#[test]
fn test_agent_as_o_blocks_too() {
    let board = board_from(&[(0, 0, Player::X), (1, 1, Player::O), (0, 1, Player::X)]);
    let agent = AlphaBetaAgent::new(Player::O);

    assert_eq!(agent.select_move(&board), Ok(pos(0, 2)));
}

#[test]
fn test_selected_move_is_always_legal() {
    for first in Position::ALL {
        for second in Position::ALL.into_iter().filter(|&p| p != first) {
            let board = board_from(&[
                (first.row(), first.col(), Player::X),
                (second.row(), second.col(), Player::O),
            ]);
            let choice = AlphaBetaAgent::new(Player::X).select_move(&board).unwrap();
            assert!(board.legal_moves().contains(&choice));
        }
    }
}

#[test]
fn test_pruning_never_changes_root_decision() {
    let mut boards = Vec::new();
    for first in Position::ALL {
        for second in Position::ALL.into_iter().filter(|&p| p != first) {
            boards.push(board_from(&[
                (first.row(), first.col(), Player::X),
                (second.row(), second.col(), Player::O),
            ]));
        }
    }
    boards.push(board_from(&[
        (0, 0, Player::X),
        (1, 1, Player::O),
        (2, 2, Player::X),
        (0, 2, Player::O),
    ]));
    boards.push(board_from(&[
        (1, 1, Player::X),
        (0, 1, Player::O),
        (2, 0, Player::X),
        (0, 2, Player::O),
        (1, 0, Player::X),
        (2, 2, Player::O),
    ]));

    let pruned = AlphaBetaAgent::new(Player::X);
    let full = AlphaBetaAgent::with_pruning(Player::X, false);

    for board in &boards {
        let a = pruned.evaluate(board).unwrap();
        let b = full.evaluate(board).unwrap();
        assert_eq!(a.mv(), b.mv(), "moves differ on {:?}", board.moves());
        assert_eq!(a.value(), b.value(), "values differ on {:?}", board.moves());
    }
}

#[test]
fn test_finished_board_is_an_error() {
    let board = board_from(&[
        (0, 0, Player::X),
        (1, 0, Player::O),
        (1, 1, Player::X),
        (2, 0, Player::O),
        (2, 2, Player::X),
    ]);
    assert_eq!(board.winner(), Some(Player::X));

    for player in [Player::X, Player::O] {
        assert_eq!(
            AlphaBetaAgent::new(player).select_move(&board),
            Err(SearchError::TerminalBoard)
        );
    }
}
