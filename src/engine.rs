//! Background search controller
//!
//! [`SearchController`] snapshots the live game, runs a [`Searcher`] on its
//! own thread and hands the result back through a channel. The UI polls it
//! once per frame; nothing ever blocks the render loop except
//! [`SearchController::cancel`], which waits for the worker to unwind.
//!
//! # Example
//!
//! ```
//! use cram::{Game, SearchController};
//!
//! let game = Game::new(4).unwrap();
//! let mut controller = SearchController::spawn(&game, 2).unwrap();
//! let result = controller.wait().unwrap();
//! assert!(result.best_move.is_some());
//! ```

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, instrument, warn};

use crate::error::{GameError, MoveError, SearchError};
use crate::game::Game;
use crate::search::{CancelToken, SearchResult, Searcher};

type WorkerResult = Result<SearchResult, SearchError>;

/// Handle to one search running on a worker thread.
///
/// Dropping the controller cancels the search and joins the worker.
pub struct SearchController {
    cancel: CancelToken,
    /// `None` once the result was delivered or the search was cancelled
    receiver: Option<Receiver<WorkerResult>>,
    handle: Option<JoinHandle<()>>,
    depth: u32,
    start_time: Instant,
}

impl SearchController {
    /// Start searching `depth` plies for the side to move in `game`.
    ///
    /// The game is cloned; the caller keeps ownership of the live instance.
    #[instrument(skip(game), fields(size = game.size()))]
    pub fn spawn(game: &Game, depth: u32) -> Result<Self, SearchError> {
        if depth == 0 {
            return Err(SearchError::InvalidDepth(depth));
        }
        let me = game
            .to_move()
            .ok_or(GameError::InvalidMove(MoveError::GameOver))?;

        let snapshot = game.clone();
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let mut searcher = Searcher::new(snapshot.size(), token);
            let result = searcher.search(&snapshot, me, depth);
            // The receiver is gone if the search was cancelled
            let _ = tx.send(result);
        });
        debug!(player = %me, "search started");

        Ok(Self {
            cancel,
            receiver: Some(rx),
            handle: Some(handle),
            depth,
            start_time: Instant::now(),
        })
    }

    /// Non-blocking check for the result.
    ///
    /// Returns `Ok(Some(_))` exactly once. After [`cancel`](Self::cancel)
    /// this always returns `Ok(None)`.
    pub fn poll(&mut self) -> Result<Option<SearchResult>, SearchError> {
        if self.cancel.is_cancelled() {
            return Ok(None);
        }
        let Some(receiver) = &self.receiver else {
            return Ok(None);
        };
        match receiver.try_recv() {
            Ok(result) => {
                self.finish()?;
                Ok(Self::accept(result?))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.finish()?;
                Err(SearchError::WorkerDisconnected)
            }
        }
    }

    /// Block until the worker reports.
    pub fn wait(&mut self) -> Result<SearchResult, SearchError> {
        let receiver = self.receiver.as_ref().ok_or(SearchError::WorkerDisconnected)?;
        let result = receiver.recv().map_err(|_| SearchError::WorkerDisconnected);
        self.finish()?;
        let result = result??;
        if result.cancelled {
            return Err(SearchError::WorkerDisconnected);
        }
        Ok(result)
    }

    /// Stop the search and wait for the worker to exit.
    ///
    /// Any result produced in the meantime is dropped. Safe to call more
    /// than once and after the search has finished.
    pub fn cancel(&mut self) {
        self.cancel.cancel();
        self.receiver = None;
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("search worker panicked during cancel");
            }
            debug!(
                elapsed_ms = self.start_time.elapsed().as_millis() as u64,
                "search cancelled"
            );
        }
    }

    /// True until the result is delivered or the search is cancelled
    pub fn is_running(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Drop the channel and join the worker after it has reported.
    fn finish(&mut self) -> Result<(), SearchError> {
        self.receiver = None;
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| SearchError::WorkerPanicked),
            None => Ok(()),
        }
    }

    fn accept(result: SearchResult) -> Option<SearchResult> {
        (!result.cancelled).then_some(result)
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Domino, Pos};

    fn poll_until_done(controller: &mut SearchController) -> SearchResult {
        for _ in 0..2000 {
            if let Some(result) = controller.poll().unwrap() {
                return result;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("search did not finish");
    }

    #[test]
    fn test_poll_delivers_once() {
        let game = Game::new(4).unwrap();
        let mut controller = SearchController::spawn(&game, 2).unwrap();
        let result = poll_until_done(&mut controller);
        assert!(result.best_move.is_some());
        assert!(!controller.is_running());
        assert!(controller.poll().unwrap().is_none());
    }

    #[test]
    fn test_matches_direct_search() {
        let mut game = Game::new(4).unwrap();
        game.apply(Domino::horizontal(Pos::new(0, 0))).unwrap();

        let mut controller = SearchController::spawn(&game, 2).unwrap();
        let threaded = controller.wait().unwrap();
        let direct = Searcher::new(4, CancelToken::new())
            .search(&game, crate::Player::Blue, 2)
            .unwrap();
        assert_eq!(threaded.best_move, direct.best_move);
    }

    #[test]
    fn test_cancel_discards_result() {
        // Deep enough that it cannot finish before the cancel lands
        let game = Game::new(8).unwrap();
        let mut controller = SearchController::spawn(&game, 12).unwrap();
        controller.cancel();
        assert!(controller.is_cancelled());
        assert!(!controller.is_running());
        assert!(controller.poll().unwrap().is_none());
        controller.cancel();
    }

    #[test]
    fn test_cancel_after_finish() {
        let game = Game::new(2).unwrap();
        let mut controller = SearchController::spawn(&game, 1).unwrap();
        thread::sleep(Duration::from_millis(50));
        controller.cancel();
        assert!(controller.poll().unwrap().is_none());
    }

    #[test]
    fn test_spawn_rejects_zero_depth() {
        let game = Game::new(4).unwrap();
        assert!(matches!(
            SearchController::spawn(&game, 0),
            Err(SearchError::InvalidDepth(0))
        ));
    }

    #[test]
    fn test_spawn_rejects_finished_game() {
        let mut game = Game::new(2).unwrap();
        game.apply(Domino::horizontal(Pos::new(0, 0))).unwrap();
        game.apply(Domino::horizontal(Pos::new(1, 0))).unwrap();
        assert!(matches!(
            SearchController::spawn(&game, 2),
            Err(SearchError::Game(GameError::InvalidMove(MoveError::GameOver)))
        ));
    }

    #[test]
    fn test_live_game_untouched_during_search() {
        let game = Game::new(4).unwrap();
        let before = game.clone();
        let mut controller = SearchController::spawn(&game, 3).unwrap();
        assert_eq!(game, before);
        controller.wait().unwrap();
        assert_eq!(game, before);
    }
}
