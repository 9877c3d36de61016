//! Board representation for Cram

pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::error::MoveError;

// Re-exports
pub use board::{is_valid_size, Board};

/// Largest supported board side; coordinates are stored as `u8`.
pub const MAX_BOARD_SIZE: usize = 254;

/// Default board side used by the GUI and the CLI.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Contents of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Blue,
}

impl Cell {
    /// Owner of this cell, if covered
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Blue => Some(Player::Blue),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The two sides. Red always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Cell colour this player paints
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Blue => Cell::Blue,
        }
    }

    /// Player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of side `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_within(self, size: usize) -> bool {
        (self.row as usize) < size && (self.col as usize) < size
    }

    /// Manhattan distance between two cells
    #[inline]
    pub fn manhattan(self, other: Pos) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move: two orthogonally adjacent cells covered at once.
///
/// The pair is unordered. Construction stores the cells in row-major order,
/// so `Domino::new(a, b)` and `Domino::new(b, a)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Domino {
    first: Pos,
    second: Pos,
}

impl Domino {
    /// Build a domino from two cells in either order.
    ///
    /// Fails with [`MoveError::NotAdjacent`] unless the cells are at
    /// Manhattan distance exactly 1.
    pub fn new(a: Pos, b: Pos) -> Result<Self, MoveError> {
        if a.manhattan(b) != 1 {
            return Err(MoveError::NotAdjacent { a, b });
        }
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { first, second })
    }

    /// Horizontal domino with its left cell at `pos`
    #[inline]
    pub fn horizontal(pos: Pos) -> Self {
        Self {
            first: pos,
            second: Pos::new(pos.row, pos.col + 1),
        }
    }

    /// Vertical domino with its top cell at `pos`
    #[inline]
    pub fn vertical(pos: Pos) -> Self {
        Self {
            first: pos,
            second: Pos::new(pos.row + 1, pos.col),
        }
    }

    #[inline]
    pub fn cells(self) -> [Pos; 2] {
        [self.first, self.second]
    }

    #[inline]
    pub fn first(self) -> Pos {
        self.first
    }

    #[inline]
    pub fn second(self) -> Pos {
        self.second
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.first.row == self.second.row
    }

    #[inline]
    pub fn covers(self, pos: Pos) -> bool {
        self.first == pos || self.second == pos
    }

    /// True when the two dominoes share a cell
    #[inline]
    pub fn overlaps(self, other: Domino) -> bool {
        other.cells().iter().any(|&p| self.covers(p))
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
