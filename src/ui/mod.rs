//! GUI module for the Cram game
//!
//! This module provides a native Rust GUI using egui/eframe. All game
//! logic lives in [`crate::session::Match`]; the UI only forwards input
//! and polls.

mod app;
mod board_view;
mod theme;

pub use app::CramApp;
pub use board_view::{BoardFrame, BoardInput, BoardView};
