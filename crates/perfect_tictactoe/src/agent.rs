//! Alpha-beta minimax agent.
//!
//! The agent searches the full game tree from the given board, scoring
//! terminal positions from its own point of view:
//!
//! - win: `10 - depth` (faster wins score higher)
//! - loss: `-10 + depth` (slower losses score higher)
//! - draw: `0`
//!
//! Children are explored in row-major order and ties keep the first move
//! found, so the chosen move is deterministic.

use crate::{Board, MoveError, Player, Position, SearchError};
use tracing::{debug, instrument, warn};

/// Score of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Initial lower bound, safely below any reachable score.
const ALPHA_INIT: i32 = -100;

/// Initial upper bound, safely above any reachable score.
const BETA_INIT: i32 = 100;

/// Outcome of searching one node: the move leading to it, its score, and
/// the depth of the terminal position the score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    mv: Option<Position>,
    value: i32,
    depth: u32,
}

impl SearchResult {
    fn leaf(value: i32, depth: u32) -> Self {
        Self {
            mv: None,
            value,
            depth,
        }
    }

    /// Move that leads to this result, `None` for terminal positions.
    pub fn mv(&self) -> Option<Position> {
        self.mv
    }

    /// Score from the agent's point of view.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Depth of the terminal position behind the score.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mv {
            Some(pos) => write!(f, "{}: {}", pos, self.value),
            None => write!(f, "-: {}", self.value),
        }
    }
}

/// Perfect-play agent bound to one side.
///
/// Holds no board state between calls; every hypothetical line is played on
/// a cloned board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBetaAgent {
    player: Player,
    pruning: bool,
}

impl AlphaBetaAgent {
    /// Creates an agent playing for `player` with pruning enabled.
    pub fn new(player: Player) -> Self {
        Self::with_pruning(player, true)
    }

    /// Creates an agent, optionally disabling alpha-beta cutoffs.
    ///
    /// Without pruning the search is plain exhaustive minimax with the same
    /// scores and tie-breaking.
    pub fn with_pruning(player: Player, pruning: bool) -> Self {
        Self { player, pruning }
    }

    /// Side this agent plays for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Whether cutoffs are enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Returns the best move for this agent's player on a non-terminal board.
    #[instrument(skip(self, board), fields(player = %self.player))]
    pub fn select_move(&self, board: &Board) -> Result<Position, SearchError> {
        let result = self.evaluate(board)?;
        result.mv.ok_or(SearchError::TerminalBoard)
    }

    /// Searches `board` with this agent to move and returns the root result.
    #[instrument(skip(self, board), fields(player = %self.player, pruning = self.pruning, moves = board.moves().len()))]
    pub fn evaluate(&self, board: &Board) -> Result<SearchResult, SearchError> {
        if board.is_terminal() {
            warn!(winner = ?board.winner(), "Refusing to search a finished board");
            return Err(SearchError::TerminalBoard);
        }

        let mut nodes = 0u64;
        let result = self.search(board, true, self.player, 0, ALPHA_INIT, BETA_INIT, &mut nodes)?;

        debug!(nodes, result = %result, depth = result.depth, "Search complete");
        Ok(result)
    }

    /// Scores a finished board, or `None` if play continues.
    fn terminal_score(&self, board: &Board, depth: u32) -> Option<i32> {
        let depth = depth as i32;
        match board.winner() {
            Some(winner) if winner == self.player => Some(WIN_SCORE - depth),
            Some(_) => Some(-WIN_SCORE + depth),
            None if board.is_full() => Some(0),
            None => None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn search(
        &self,
        board: &Board,
        maximizing: bool,
        to_move: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> Result<SearchResult, MoveError> {
        *nodes += 1;

        if let Some(score) = self.terminal_score(board, depth) {
            return Ok(SearchResult::leaf(score, depth));
        }

        let mut best: Option<SearchResult> = None;

        for pos in board.legal_moves() {
            let mut child = board.clone();
            child.place(pos, to_move)?;

            let mut result = self.search(
                &child,
                !maximizing,
                to_move.opponent(),
                depth + 1,
                alpha,
                beta,
                nodes,
            )?;

            if maximizing {
                alpha = alpha.max(result.value);
            } else {
                beta = beta.min(result.value);
            }

            // Cutoff: the record goes up as the child produced it.
            if self.pruning && alpha >= beta {
                return Ok(result);
            }

            result.mv = Some(pos);

            let improves = best.is_none_or(|incumbent| {
                if maximizing {
                    result.value > incumbent.value
                } else {
                    result.value < incumbent.value
                }
            });
            if improves {
                best = Some(result);
            }
        }

        // A board with no legal moves is full, which the terminal check
        // already scored.
        Ok(best.unwrap_or(SearchResult::leaf(0, depth)))
    }
}
