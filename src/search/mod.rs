//! Search for the computer player
//!
//! Fixed-depth minimax with cooperative cancellation through a
//! [`CancelToken`].

pub mod minimax;

pub use minimax::{CancelToken, SearchResult, Searcher};
