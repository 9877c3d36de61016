//! Error types for the Cram engine

use std::path::PathBuf;

use crate::board::Pos;

/// Why a domino could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Pos),

    #[error("cells {a} and {b} are not orthogonally adjacent")]
    NotAdjacent { a: Pos, b: Pos },

    #[error("cell {0} is already covered")]
    Occupied(Pos),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the game state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board size {0} is invalid (must be even and between 2 and {max})", max = crate::board::MAX_BOARD_SIZE)]
    InvalidBoardSize(usize),

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),

    #[error("undo requested with an empty history")]
    EmptyHistory,
}

/// Errors raised by the search engine and its controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("game error during search: {0}")]
    Game(#[from] GameError),

    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    #[error("non-terminal position has no legal moves at depth {depth}")]
    NoLegalMoves { depth: u32 },

    #[error("search worker panicked")]
    WorkerPanicked,

    #[error("search worker exited without reporting a result")]
    WorkerDisconnected,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors from parsing the textual board format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("board text is empty")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    BadCell { ch: char, row: usize, col: usize },

    #[error("board size {0} is invalid")]
    BadSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NotAdjacent {
            a: Pos::new(0, 0),
            b: Pos::new(1, 1),
        };
        assert_eq!(
            err.to_string(),
            "cells (0, 0) and (1, 1) are not orthogonally adjacent"
        );
    }

    #[test]
    fn test_game_error_wraps_move_error() {
        let err: GameError = MoveError::Occupied(Pos::new(2, 3)).into();
        assert_eq!(err.to_string(), "invalid move: cell (2, 3) is already covered");
    }

    #[test]
    fn test_search_error_from_empty_history() {
        let err: SearchError = GameError::EmptyHistory.into();
        assert_eq!(
            err.to_string(),
            "game error during search: undo requested with an empty history"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.difficulty must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.difficulty must be >= 1"
        );
    }
}
