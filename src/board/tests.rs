use super::*;
use crate::error::{BoardParseError, GameError, MoveError};

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Red.opponent(), Player::Blue);
    assert_eq!(Player::Blue.opponent(), Player::Red);
}

#[test]
fn test_player_cell() {
    assert_eq!(Player::Red.cell(), Cell::Red);
    assert_eq!(Player::Blue.cell(), Cell::Blue);
    assert_eq!(Cell::Blue.owner(), Some(Player::Blue));
    assert_eq!(Cell::Empty.owner(), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(6), 15);
    assert_eq!(Pos::from_index(15, 6), pos);
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(Pos::new(0, 3) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_domino_is_unordered() {
    let a = Pos::new(1, 1);
    let b = Pos::new(1, 2);
    assert_eq!(Domino::new(a, b), Domino::new(b, a));
    assert_eq!(Domino::new(a, b).unwrap(), Domino::horizontal(a));
}

#[test]
fn test_domino_rejects_non_adjacent() {
    let a = Pos::new(0, 0);
    for b in [Pos::new(0, 0), Pos::new(1, 1), Pos::new(0, 2)] {
        assert_eq!(Domino::new(a, b), Err(MoveError::NotAdjacent { a, b }));
    }
}

#[test]
fn test_domino_overlap() {
    let h = Domino::horizontal(Pos::new(0, 0));
    let v = Domino::vertical(Pos::new(0, 1));
    let far = Domino::vertical(Pos::new(2, 2));
    assert!(h.overlaps(v));
    assert!(!h.overlaps(far));
    assert!(h.is_horizontal());
    assert!(!v.is_horizontal());
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.size(), 4);
    assert!(board.is_board_empty());
    assert_eq!(board.count(Cell::Empty), 16);
}

#[test]
fn test_board_rejects_odd_and_tiny_sizes() {
    for size in [0, 1, 3, 5, MAX_BOARD_SIZE + 2] {
        assert_eq!(Board::new(size), Err(GameError::InvalidBoardSize(size)));
    }
    assert!(Board::new(2).is_ok());
    assert!(Board::new(MAX_BOARD_SIZE).is_ok());
}

#[test]
fn test_out_of_bounds_reads_none() {
    let board = Board::new(2).unwrap();
    assert_eq!(board.get(Pos::new(2, 0)), None);
    assert!(!board.is_empty(Pos::new(0, 2)));
}

#[test]
fn test_cover_and_line_counts() {
    let mut board = Board::new(4).unwrap();
    board.cover(Domino::horizontal(Pos::new(0, 0)), Player::Red);
    assert_eq!(board.get(Pos::new(0, 1)), Some(Cell::Red));
    assert_eq!(board.empty_in_row(0), 2);
    assert_eq!(board.empty_in_col(0), 3);
    assert_eq!(board.empty_in_col(2), 4);
}

#[test]
fn test_parse_and_display() {
    let text = "RR..\n....\n.BB.\n....";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.size(), 4);
    assert_eq!(board.get(Pos::new(2, 1)), Some(Cell::Blue));
    assert_eq!(board.to_string(), text);

    let slashed: Board = "RR../..../.BB./....".parse().unwrap();
    assert_eq!(slashed, board);
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<Board>(), Err(BoardParseError::Empty));
    assert_eq!("...".parse::<Board>(), Err(BoardParseError::BadSize(1)));
    assert_eq!(
        "../.".parse::<Board>(),
        Err(BoardParseError::RaggedRow {
            row: 1,
            found: 1,
            expected: 2
        })
    );
    assert_eq!(
        ".x/..".parse::<Board>(),
        Err(BoardParseError::BadCell {
            ch: 'x',
            row: 0,
            col: 1
        })
    );
}
