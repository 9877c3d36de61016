//! Horizon evaluation
//!
//! Sums a per-line score over every row and every column. Line scores are
//! read from a [`LineTable`] for the board size and are relative to the
//! side to move; the result is flipped when the evaluating side is not to
//! move.

use super::table::LineTable;
use crate::board::{Board, Player};

/// Heuristic evaluator bound to one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    table: LineTable,
}

impl Evaluator {
    /// Evaluator using the default table for `size`
    pub fn for_size(size: usize) -> Self {
        Self {
            table: LineTable::for_size(size),
        }
    }

    /// Evaluator with a caller-supplied table
    pub fn with_table(table: LineTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &LineTable {
        &self.table
    }

    /// Score `board` for `me`, with `to_move` about to play.
    ///
    /// Only meaningful on non-terminal positions. The magnitude always stays
    /// below [`WIN`](super::WIN).
    #[must_use]
    pub fn evaluate(&self, board: &Board, to_move: Player, me: Player) -> i32 {
        let size = board.size();
        let mut score = 0i32;
        for line in 0..size {
            score += self.table.score(board.empty_in_row(line));
            score += self.table.score(board.empty_in_col(line));
        }
        if to_move == me {
            score
        } else {
            -score
        }
    }
}

/// Evaluate with the default table for the board's size.
#[must_use]
pub fn evaluate(board: &Board, to_move: Player, me: Player) -> i32 {
    Evaluator::for_size(board.size()).evaluate(board, to_move, me)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Domino, Pos};
    use crate::eval::WIN;

    #[test]
    fn test_evaluate_empty_board() {
        // 8 full lines on 4x4, each -40 for the side to move
        let board = Board::new(4).unwrap();
        assert_eq!(evaluate(&board, Player::Red, Player::Red), -320);
        assert_eq!(evaluate(&board, Player::Red, Player::Blue), 320);
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let mut board = Board::new(6).unwrap();
        board.cover(Domino::horizontal(Pos::new(0, 0)), Player::Red);
        board.cover(Domino::vertical(Pos::new(2, 3)), Player::Blue);
        for to_move in [Player::Red, Player::Blue] {
            let red = evaluate(&board, to_move, Player::Red);
            let blue = evaluate(&board, to_move, Player::Blue);
            assert_eq!(red, -blue);
        }
    }

    #[test]
    fn test_evaluate_counts_rows_and_columns() {
        let board: Board = "RRBB/BBRR/RR../BBRR".parse().unwrap();
        // Row 2 holds the only live line; columns 2 and 3 have one empty cell each
        assert_eq!(evaluate(&board, Player::Red, Player::Red), 30);
    }

    #[test]
    fn test_custom_table() {
        let eval = Evaluator::with_table(LineTable::from_entries(2, &[(2, 7)]));
        let board = Board::new(2).unwrap();
        assert_eq!(eval.evaluate(&board, Player::Blue, Player::Blue), 28);
    }

    #[test]
    fn test_evaluate_stays_below_win() {
        for size in [2, 4, 6, 8] {
            let board = Board::new(size).unwrap();
            assert!(evaluate(&board, Player::Red, Player::Red).abs() < WIN);
        }
    }
}
