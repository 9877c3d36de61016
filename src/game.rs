//! Game state machine: board, side to move and an undo history
//!
//! A [`Game`] is mutated only through [`Game::apply`] and [`Game::undo`].
//! Every apply pushes a full snapshot of the prior board and side to move;
//! undo pops it and restores both verbatim. The search engine works on a
//! private clone and backtracks with undo, so the authoritative instance
//! held by the UI is never touched during a search.

use tracing::instrument;

use crate::board::{Board, Domino, Player, Pos};
use crate::error::{GameError, MoveError};
use crate::rules;

/// Whether the game has finished, and who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotOver,
    Over { winner: Player },
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::NotOver => None,
        }
    }
}

/// What a successful move reports back to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mover: Player,
    pub domino: Domino,
    pub status: GameStatus,
}

/// Board and side to move as they were before a move.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Snapshot {
    board: Board,
    to_move: Player,
}

/// A single Cram match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    /// `None` once the game is over
    to_move: Option<Player>,
    status: GameStatus,
    history: Vec<Snapshot>,
}

impl Game {
    /// Start a match on an empty `size`×`size` board with Red to move.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        Ok(Self {
            board,
            to_move: Some(Player::Red),
            status: GameStatus::NotOver,
            history: Vec::with_capacity(size * size / 2),
        })
    }

    /// Start from a hand-built position.
    ///
    /// The side to move is derived from the colour counts; positions no
    /// legal game can reach are rejected. If no move remains the game is
    /// already over and the side that placed the last domino has won.
    pub fn from_board(board: Board) -> Result<Self, GameError> {
        let to_move = rules::side_to_move(&board).ok_or_else(|| {
            GameError::InvalidPosition(format!(
                "colour counts red={} blue={} cannot arise from alternating dominoes",
                board.count(crate::board::Cell::Red),
                board.count(crate::board::Cell::Blue)
            ))
        })?;
        let status = match rules::winner_for(&board, to_move) {
            Some(winner) => GameStatus::Over { winner },
            None => GameStatus::NotOver,
        };
        let capacity = board.size() * board.size() / 2;
        Ok(Self {
            board,
            to_move: (!status.is_over()).then_some(to_move),
            status,
            history: Vec::with_capacity(capacity),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Side to move, or `None` once the game is over
    #[inline]
    pub fn to_move(&self) -> Option<Player> {
        self.to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Number of moves that can currently be undone
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Legal moves in canonical order; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Domino> {
        if self.is_over() {
            return Vec::new();
        }
        rules::legal_moves(&self.board)
    }

    /// Check whether `domino` may be played now.
    pub fn check_move(&self, domino: Domino) -> Result<Player, MoveError> {
        let mover = self.to_move.ok_or(MoveError::GameOver)?;
        rules::check_placement(&self.board, domino)?;
        Ok(mover)
    }

    /// Place `domino` for the side to move.
    ///
    /// On error the game is left unchanged.
    pub fn apply(&mut self, domino: Domino) -> Result<MoveOutcome, MoveError> {
        let mover = self.check_move(domino)?;

        self.history.push(Snapshot {
            board: self.board.clone(),
            to_move: mover,
        });
        self.board.cover(domino, mover);

        if rules::is_terminal(&self.board) {
            self.status = GameStatus::Over { winner: mover };
            self.to_move = None;
        } else {
            self.to_move = Some(mover.opponent());
        }

        Ok(MoveOutcome {
            mover,
            domino,
            status: self.status,
        })
    }

    /// Compose a domino from two picked cells and apply it.
    ///
    /// This is the entry point for the pick/release input path; the two
    /// cells may arrive in either order.
    pub fn apply_cells(&mut self, a: Pos, b: Pos) -> Result<MoveOutcome, MoveError> {
        for pos in [a, b] {
            if !pos.is_within(self.size()) {
                return Err(MoveError::OutOfBounds(pos));
            }
        }
        self.apply(Domino::new(a, b)?)
    }

    /// Restore the state from before the most recent move.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let snapshot = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.board = snapshot.board;
        self.to_move = Some(snapshot.to_move);
        // Moves are only applied to live positions
        self.status = GameStatus::NotOver;
        Ok(())
    }
}
