//! Fixed-depth minimax
//!
//! Plain minimax without pruning or move ordering. The searcher works on a
//! private clone of the game and backtracks with [`Game::undo`], so the
//! caller's game is never touched.
//!
//! # Example
//!
//! ```
//! use cram::game::Game;
//! use cram::search::{CancelToken, Searcher};
//!
//! let game = Game::new(4).unwrap();
//! let mut searcher = Searcher::new(4, CancelToken::new());
//!
//! let result = searcher.search(&game, cram::Player::Red, 2).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::board::{Domino, Player};
use crate::error::{GameError, SearchError};
use crate::eval::{Evaluator, WIN};
use crate::game::{Game, GameStatus};

/// Shared stop flag, polled at the entry of every search node.
///
/// Clones share the same flag. Once set it stays set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the search to stop. Idempotent.
    #[inline]
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Result of a search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` at a terminal root, at depth 0, or when cancelled
    pub best_move: Option<Domino>,
    /// Minimax value of the root for the searching side
    pub score: i32,
    /// Requested depth
    pub depth: u32,
    /// Nodes visited, root included
    pub nodes: u64,
    /// The stop flag was raised before the search finished; discard the result
    pub cancelled: bool,
    pub elapsed: Duration,
}

impl SearchResult {
    /// True if the score is an exact forced win for the searching side
    #[inline]
    pub fn is_forced_win(&self) -> bool {
        !self.cancelled && self.score == WIN
    }

    /// True if the score is an exact forced loss for the searching side
    #[inline]
    pub fn is_forced_loss(&self) -> bool {
        !self.cancelled && self.score == -WIN
    }
}

/// Minimax searcher for one board size.
pub struct Searcher {
    evaluator: Evaluator,
    cancel: CancelToken,
    /// Side the current search is choosing a move for
    me: Player,
    nodes: u64,
}

impl Searcher {
    /// Searcher with the default evaluator for `size`.
    pub fn new(size: usize, cancel: CancelToken) -> Self {
        Self::with_evaluator(Evaluator::for_size(size), cancel)
    }

    pub fn with_evaluator(evaluator: Evaluator, cancel: CancelToken) -> Self {
        Self {
            evaluator,
            cancel,
            me: Player::Red,
            nodes: 0,
        }
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    /// Search `depth` plies ahead on behalf of `me`.
    ///
    /// `me` is normally the side to move. A terminal root yields no move and
    /// an exact ±WIN; depth 0 yields no move and the heuristic value.
    #[instrument(skip(self, game), fields(size = game.size()))]
    pub fn search(
        &mut self,
        game: &Game,
        me: Player,
        depth: u32,
    ) -> Result<SearchResult, SearchError> {
        let start = Instant::now();
        self.me = me;
        self.nodes = 0;

        let mut work = game.clone();
        let (best_move, score) = self.minimax(&mut work, depth, true, true)?;
        let cancelled = self.cancel.is_cancelled();

        let result = SearchResult {
            best_move: if cancelled { None } else { best_move },
            score,
            depth,
            nodes: self.nodes,
            cancelled,
            elapsed: start.elapsed(),
        };
        info!(
            best = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cancelled = result.cancelled,
            elapsed_ms = result.elapsed.as_millis() as u64,
            "search finished"
        );
        Ok(result)
    }

    fn minimax(
        &mut self,
        game: &mut Game,
        depth: u32,
        maximizing: bool,
        root: bool,
    ) -> Result<(Option<Domino>, i32), SearchError> {
        if self.cancel.is_cancelled() {
            return Ok((None, 0));
        }
        self.nodes += 1;

        let to_move = match (game.status(), game.to_move()) {
            (GameStatus::Over { winner }, _) => {
                let score = if winner == self.me { WIN } else { -WIN };
                return Ok((None, score));
            }
            (GameStatus::NotOver, Some(to_move)) => to_move,
            (GameStatus::NotOver, None) => {
                let msg = "live game without a side to move".to_string();
                return Err(GameError::InvalidPosition(msg).into());
            }
        };

        if depth == 0 {
            let score = self.evaluator.evaluate(game.board(), to_move, self.me);
            return Ok((None, score));
        }

        let moves = game.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves { depth });
        }

        let mut best_move = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for domino in moves {
            game.apply(domino).map_err(GameError::from)?;
            let (_, score) = self.minimax(game, depth - 1, !maximizing, false)?;
            game.undo()?;

            if self.cancel.is_cancelled() {
                break;
            }
            if root {
                debug!(domino = %domino, score, "root move");
            }

            let better = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if better {
                best_score = score;
                best_move = Some(domino);
            }
        }

        Ok((best_move, best_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Pos};
    use crate::eval::LineTable;

    fn searcher(size: usize) -> Searcher {
        Searcher::new(size, CancelToken::new())
    }

    #[test]
    fn test_search_empty_board() {
        let game = Game::new(4).unwrap();
        let result = searcher(4).search(&game, Player::Red, 2).unwrap();
        assert!(result.best_move.is_some());
        assert!(!result.cancelled);
        assert!(result.nodes > 24);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut game = Game::new(4).unwrap();
        game.apply(Domino::vertical(Pos::new(1, 1))).unwrap();

        let first = searcher(4).search(&game, Player::Blue, 3).unwrap();
        let second = searcher(4).search(&game, Player::Blue, 3).unwrap();
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn test_search_does_not_touch_game() {
        let game = Game::new(4).unwrap();
        let before = game.clone();
        searcher(4).search(&game, Player::Red, 2).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_terminal_score_beats_heuristic() {
        // Red to move. H(0,1) isolates (0,0) and (0,3) and wins on the spot;
        // H(0,0) comes first and the table below rates it far higher.
        let board: Board = "..../RRBB/BBRR/RRBB".parse().unwrap();
        let game = Game::from_board(board).unwrap();
        let eval = Evaluator::with_table(LineTable::from_entries(4, &[(2, -50_000)]));

        for depth in [1, 2, 3] {
            let mut searcher = Searcher::with_evaluator(eval.clone(), CancelToken::new());
            let result = searcher.search(&game, Player::Red, depth).unwrap();
            assert_eq!(result.best_move, Some(Domino::horizontal(Pos::new(0, 1))));
            assert_eq!(result.score, WIN);
            assert!(result.is_forced_win());
        }
    }

    #[test]
    fn test_lost_position_still_returns_first_move() {
        // Every opening on 2x2 leaves exactly one reply, which wins for Blue
        let game = Game::new(2).unwrap();
        let result = searcher(2).search(&game, Player::Red, 2).unwrap();
        assert_eq!(result.best_move, Some(Domino::horizontal(Pos::new(0, 0))));
        assert!(result.is_forced_loss());
    }

    #[test]
    fn test_terminal_root() {
        let board: Board = "R.RB/BRB./.RBR/BB.R".parse().unwrap();
        let game = Game::from_board(board).unwrap();
        let result = searcher(4).search(&game, Player::Blue, 3).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, WIN);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_depth_zero_returns_evaluation() {
        let game = Game::new(4).unwrap();
        let result = searcher(4).search(&game, Player::Red, 0).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(
            result.score,
            Evaluator::for_size(4).evaluate(game.board(), Player::Red, Player::Red)
        );
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let game = Game::new(4).unwrap();
        let mut searcher = Searcher::new(4, token);
        let result = searcher.search(&game, Player::Red, 3).unwrap();
        assert!(result.cancelled);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_cancel_token_is_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
