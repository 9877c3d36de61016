//! Human and computer players behind one interface
//!
//! Both kinds accept the same calls. Humans build a move from a pick and a
//! release and ignore [`Participant::poll`]; computers run a background
//! search per turn and ignore picks and releases.

use std::time::Duration;

use tracing::debug;

use crate::board::{Domino, Pos};
use crate::engine::SearchController;
use crate::error::{MoveError, SearchError};
use crate::game::Game;

/// One side of a match
pub enum Participant {
    Human {
        /// First cell of a domino being dragged
        pending_pick: Option<Pos>,
    },
    Computer {
        depth: u32,
        /// Search for the current turn, if one is running
        controller: Option<SearchController>,
    },
}

impl Participant {
    pub fn human() -> Self {
        Participant::Human { pending_pick: None }
    }

    pub fn computer(depth: u32) -> Self {
        Participant::Computer {
            depth,
            controller: None,
        }
    }

    #[inline]
    pub fn is_human(&self) -> bool {
        matches!(self, Participant::Human { .. })
    }

    /// Prepare for a new turn on `game`.
    ///
    /// A computer cancels any earlier search and starts a fresh one.
    pub fn start_turn(&mut self, game: &Game) -> Result<(), SearchError> {
        match self {
            Participant::Human { pending_pick } => {
                *pending_pick = None;
                Ok(())
            }
            Participant::Computer { depth, controller } => {
                if let Some(mut old) = controller.take() {
                    old.cancel();
                }
                *controller = Some(SearchController::spawn(game, *depth)?);
                Ok(())
            }
        }
    }

    /// Remember the cell where a drag began.
    pub fn submit_first_pick(&mut self, pos: Pos) {
        if let Participant::Human { pending_pick } = self {
            *pending_pick = Some(pos);
        }
    }

    /// Finish a drag at `pos`.
    ///
    /// Returns the domino spanning the picked and released cells, or
    /// `Ok(None)` if nothing was picked. The pick is consumed either way.
    pub fn submit_release(&mut self, pos: Pos) -> Result<Option<Domino>, MoveError> {
        match self {
            Participant::Human { pending_pick } => match pending_pick.take() {
                Some(first) => Domino::new(first, pos).map(Some),
                None => Ok(None),
            },
            Participant::Computer { .. } => Ok(None),
        }
    }

    /// Abandon the current turn: clear a pending pick or stop the search.
    pub fn request_cancel(&mut self) {
        match self {
            Participant::Human { pending_pick } => *pending_pick = None,
            Participant::Computer { controller, .. } => {
                if let Some(mut running) = controller.take() {
                    running.cancel();
                    debug!("computer turn cancelled");
                }
            }
        }
    }

    /// Move chosen by a computer, once its search has finished.
    pub fn poll(&mut self) -> Result<Option<Domino>, SearchError> {
        let Participant::Computer { depth, controller } = self else {
            return Ok(None);
        };
        let Some(running) = controller.as_mut() else {
            return Ok(None);
        };
        let Some(result) = running.poll()? else {
            return Ok(None);
        };
        *controller = None;
        // A search of depth >= 1 from a live position always picks a move
        result
            .best_move
            .map(Some)
            .ok_or(SearchError::NoLegalMoves { depth: *depth })
    }

    /// True while a computer search is in flight
    pub fn is_thinking(&self) -> bool {
        matches!(
            self,
            Participant::Computer {
                controller: Some(c),
                ..
            } if c.is_running()
        )
    }

    pub fn thinking_elapsed(&self) -> Option<Duration> {
        match self {
            Participant::Computer {
                controller: Some(c),
                ..
            } => Some(c.elapsed()),
            _ => None,
        }
    }

    pub fn pending_pick(&self) -> Option<Pos> {
        match self {
            Participant::Human { pending_pick } => *pending_pick,
            Participant::Computer { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_human_pick_and_release() {
        let mut human = Participant::human();
        human.submit_first_pick(Pos::new(1, 2));
        assert_eq!(human.pending_pick(), Some(Pos::new(1, 2)));

        let domino = human.submit_release(Pos::new(1, 1)).unwrap();
        assert_eq!(domino, Some(Domino::horizontal(Pos::new(1, 1))));
        assert_eq!(human.pending_pick(), None);
    }

    #[test]
    fn test_human_release_without_pick() {
        let mut human = Participant::human();
        assert_eq!(human.submit_release(Pos::new(0, 0)), Ok(None));
    }

    #[test]
    fn test_human_release_on_same_cell_fails() {
        let mut human = Participant::human();
        human.submit_first_pick(Pos::new(0, 0));
        assert!(matches!(
            human.submit_release(Pos::new(0, 0)),
            Err(MoveError::NotAdjacent { .. })
        ));
        assert_eq!(human.pending_pick(), None);
    }

    #[test]
    fn test_human_cancel_clears_pick() {
        let mut human = Participant::human();
        human.submit_first_pick(Pos::new(0, 0));
        human.request_cancel();
        assert_eq!(human.pending_pick(), None);
        assert_eq!(human.poll(), Ok(None));
    }

    #[test]
    fn test_computer_ignores_input() {
        let mut computer = Participant::computer(2);
        computer.submit_first_pick(Pos::new(0, 0));
        assert_eq!(computer.submit_release(Pos::new(0, 1)), Ok(None));
        assert!(!computer.is_thinking());
    }

    #[test]
    fn test_computer_turn() {
        let game = Game::new(4).unwrap();
        let mut computer = Participant::computer(2);
        computer.start_turn(&game).unwrap();

        let mut chosen = None;
        for _ in 0..2000 {
            if let Some(domino) = computer.poll().unwrap() {
                chosen = Some(domino);
                break;
            }
            thread::sleep(Duration::from_millis(5));
        }
        let domino = chosen.expect("computer should move");
        assert!(game.check_move(domino).is_ok());
        assert!(!computer.is_thinking());
    }

    #[test]
    fn test_computer_cancel() {
        let game = Game::new(8).unwrap();
        let mut computer = Participant::computer(12);
        computer.start_turn(&game).unwrap();
        computer.request_cancel();
        assert!(!computer.is_thinking());
        assert_eq!(computer.poll(), Ok(None));
    }
}
