//! Cram: a domino-tiling game with a minimax opponent
//!
//! Two players take turns covering two empty, orthogonally adjacent cells
//! of an N×N board. A player with no move left loses, so whoever places
//! the last domino wins.
//!
//! # Architecture
//!
//! - [`board`]: cells, players, positions, dominoes and the grid
//! - [`rules`]: canonical move generation and the terminal test
//! - [`game`]: the game state machine with undo
//! - [`eval`]: per-line heuristic used at the search horizon
//! - [`search`]: fixed-depth minimax with cooperative cancellation
//! - [`engine`]: runs a search on a worker thread behind poll/cancel
//! - [`participant`] and [`session`]: human and computer turns in a match
//! - [`config`]: TOML settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use cram::{Domino, Game, Player, Pos, SearchController};
//!
//! let mut game = Game::new(4).unwrap();
//! assert_eq!(game.legal_moves().len(), 24);
//!
//! game.apply(Domino::horizontal(Pos::new(0, 0))).unwrap();
//! assert_eq!(game.to_move(), Some(Player::Blue));
//!
//! // Computer answers for Blue
//! let mut controller = SearchController::spawn(&game, 2).unwrap();
//! let reply = controller.wait().unwrap().best_move.unwrap();
//! game.apply(reply).unwrap();
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod participant;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Domino, Player, Pos, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use config::AppConfig;
pub use engine::SearchController;
pub use error::{BoardParseError, ConfigError, GameError, MoveError, SearchError};
pub use game::{Game, GameStatus, MoveOutcome};
pub use search::{CancelToken, SearchResult, Searcher};
pub use session::{Match, Mode};
