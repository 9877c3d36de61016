//! Position evaluation for Cram
//!
//! Terminal positions are scored exactly as ±[`WIN`] by the search; the
//! heuristic here is only consulted at the search horizon.

pub mod heuristic;
pub mod table;

pub use heuristic::{evaluate, Evaluator};
pub use table::LineTable;

/// Score of a won position. Strictly larger than any heuristic value.
pub const WIN: i32 = 1_000_000;
