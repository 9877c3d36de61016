//! N×N grid of cells

use std::fmt;
use std::str::FromStr;

use super::{Cell, Domino, Player, Pos, MAX_BOARD_SIZE};
use crate::error::{BoardParseError, GameError};

/// Square Cram board with an even side length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board of side `size`.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !is_valid_size(size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position. Positions outside the board read as `None`.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        if pos.is_within(self.size) {
            Some(self.cells[pos.to_index(self.size)])
        } else {
            None
        }
    }

    /// Check if position is on the board and uncovered
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Overwrite a single cell. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if pos.is_within(self.size) {
            let idx = pos.to_index(self.size);
            self.cells[idx] = cell;
        }
    }

    /// Paint both cells of a domino with the player's colour (no validation)
    #[inline]
    pub fn cover(&mut self, domino: Domino, player: Player) {
        for pos in domino.cells() {
            self.set(pos, player.cell());
        }
    }

    /// Number of cells of the given kind
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Empty cells in row `row`
    pub fn empty_in_row(&self, row: usize) -> usize {
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .filter(|c| c.is_empty())
            .count()
    }

    /// Empty cells in column `col`
    pub fn empty_in_col(&self, col: usize) -> usize {
        (0..self.size)
            .filter(|&row| self.cells[row * self.size + col].is_empty())
            .count()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Check if board has no covered cells
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// Board sides accepted by the engine: even, at least 2.
#[inline]
pub fn is_valid_size(size: usize) -> bool {
    size >= 2 && size % 2 == 0 && size <= MAX_BOARD_SIZE
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse rows separated by `/` or newlines; `.` empty, `R` red, `B` blue.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let size = rows.len();
        if !is_valid_size(size) {
            return Err(BoardParseError::BadSize(size));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != size {
                return Err(BoardParseError::RaggedRow {
                    row,
                    found,
                    expected: size,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    '.' => Cell::Empty,
                    'R' => Cell::Red,
                    'B' => Cell::Blue,
                    _ => return Err(BoardParseError::BadCell { ch, row, col }),
                };
                cells.push(cell);
            }
        }

        Ok(Self { size, cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Blue => 'B',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
