//! Agent-vs-agent runs driven by a [`MatchConfig`].

use crate::MatchConfig;
use perfect_tictactoe::{AlphaBetaAgent, Board, Game, GameStatus, Player, Position, SearchError, SearchResult};
use tracing::{info, instrument};

/// Plays one full game between two agents and returns the final status.
#[instrument(skip_all, fields(first = %config.first_player(), pruning = config.pruning()))]
pub fn run_selfplay(config: &MatchConfig) -> Result<GameStatus, SearchError> {
    let x = AlphaBetaAgent::with_pruning(Player::X, *config.pruning());
    let o = AlphaBetaAgent::with_pruning(Player::O, *config.pruning());

    let mut game = Game::new(*config.first_player());
    game.play_out(&x, &o)
}

/// Best reply to one opening move, seen from the replying side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningReport {
    /// Square taken by the first player.
    pub opening: Position,
    /// The second player's search result after that opening.
    pub reply: SearchResult,
}

/// Evaluates every opening move for the configured first player.
#[instrument(skip_all, fields(first = %config.first_player()))]
pub fn solve_openings(config: &MatchConfig) -> Result<Vec<OpeningReport>, SearchError> {
    let first = *config.first_player();
    let responder = AlphaBetaAgent::with_pruning(first.opponent(), *config.pruning());

    Board::new()
        .legal_moves()
        .into_iter()
        .map(|opening| -> Result<OpeningReport, SearchError> {
            let mut board = Board::new();
            board.place(opening, first)?;
            let reply = responder.evaluate(&board)?;
            info!(%opening, %reply, "Opening solved");
            Ok(OpeningReport { opening, reply })
        })
        .collect()
}
