//! Legal move generation
//!
//! Moves are enumerated in canonical order: cells row-major, columns
//! ascending within a row, and for each empty cell the right neighbour
//! before the lower neighbour. The search relies on this order for its
//! first-found tie-break, so it must stay stable.

use crate::board::{Board, Domino, Pos};
use crate::error::MoveError;

/// All legal dominoes on `board` in canonical order.
pub fn legal_moves(board: &Board) -> Vec<Domino> {
    let size = board.size();
    let mut moves = Vec::with_capacity(2 * size * (size - 1));
    for_each_pair(board, |domino| {
        moves.push(domino);
        true
    });
    moves
}

/// Number of legal dominoes on `board`
pub fn count_legal_moves(board: &Board) -> usize {
    let mut count = 0;
    for_each_pair(board, |_| {
        count += 1;
        true
    });
    count
}

/// True if at least one pair of orthogonally adjacent empty cells remains.
pub fn has_legal_move(board: &Board) -> bool {
    let mut found = false;
    for_each_pair(board, |_| {
        found = true;
        false
    });
    found
}

/// Validate that `domino` can be placed on `board`.
///
/// Does not consider whose turn it is or whether the game is over.
pub fn check_placement(board: &Board, domino: Domino) -> Result<(), MoveError> {
    for pos in domino.cells() {
        match board.get(pos) {
            None => return Err(MoveError::OutOfBounds(pos)),
            Some(cell) if !cell.is_empty() => return Err(MoveError::Occupied(pos)),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Visit empty adjacent pairs in canonical order until `visit` returns false.
fn for_each_pair(board: &Board, mut visit: impl FnMut(Domino) -> bool) {
    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let pos = Pos::new(row as u8, col as u8);
            if !board.is_empty(pos) {
                continue;
            }
            let right = Pos::new(row as u8, col as u8 + 1);
            if col + 1 < size && board.is_empty(right) && !visit(Domino::horizontal(pos)) {
                return;
            }
            let below = Pos::new(row as u8 + 1, col as u8);
            if row + 1 < size && board.is_empty(below) && !visit(Domino::vertical(pos)) {
                return;
            }
        }
    }
}
