//! Terminal detection and position consistency
//!
//! A position is terminal exactly when no two orthogonally adjacent empty
//! cells remain. The player who cannot move loses, so the winner of a
//! terminal position is the player who placed the last domino.

use crate::board::{Board, Cell, Player};

use super::moves::has_legal_move;

/// Check if no domino fits anywhere on the board
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board)
}

/// Winner of a terminal position given the side that would be to move.
///
/// Returns `None` while moves remain.
pub fn winner_for(board: &Board, stuck: Player) -> Option<Player> {
    is_terminal(board).then(|| stuck.opponent())
}

/// Side whose turn it is, judged from the colour counts alone.
///
/// Every domino paints two cells and Red moves first, so both counts are
/// even and Red is ahead by exactly one domino while Blue is to move.
/// Returns `None` for counts no legal game can reach.
pub fn side_to_move(board: &Board) -> Option<Player> {
    let red = board.count(Cell::Red);
    let blue = board.count(Cell::Blue);
    if red % 2 != 0 || blue % 2 != 0 {
        return None;
    }
    if red == blue {
        Some(Player::Red)
    } else if red == blue + 2 {
        Some(Player::Blue)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new(2).unwrap();
        assert!(!is_terminal(&board));
        assert_eq!(winner_for(&board, Player::Red), None);
    }

    #[test]
    fn test_full_board_is_terminal() {
        let board: Board = "RR/BB".parse().unwrap();
        assert!(is_terminal(&board));
        assert_eq!(winner_for(&board, Player::Red), Some(Player::Blue));
    }

    #[test]
    fn test_isolated_cells_are_terminal() {
        let board: Board = "R.RB/BRB./.RBR/BB.R".parse().unwrap();
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_side_to_move_from_counts() {
        assert_eq!(side_to_move(&Board::new(4).unwrap()), Some(Player::Red));
        assert_eq!(side_to_move(&"RR/..".parse().unwrap()), Some(Player::Blue));
        assert_eq!(side_to_move(&"RR/BB".parse().unwrap()), Some(Player::Red));
    }

    #[test]
    fn test_side_to_move_rejects_unreachable_counts() {
        assert_eq!(side_to_move(&"R./..".parse().unwrap()), None);
        assert_eq!(side_to_move(&"BB/..".parse().unwrap()), None);
        assert_eq!(side_to_move(&"RRRR/..../..../....".parse().unwrap()), None);
    }
}
