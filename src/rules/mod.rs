//! Game rules for Cram
//!
//! - Legal move generation in canonical order
//! - Placement validation
//! - Terminal detection (last player to move wins)

pub mod moves;
pub mod terminal;

// Re-exports for convenient access
pub use moves::{check_placement, count_legal_moves, has_legal_move, legal_moves};
pub use terminal::{is_terminal, side_to_move, winner_for};
