//! Per-line score tables
//!
//! Each row and column is scored by how many of its cells are still empty.
//! Scores are from the perspective of the side to move: a line holding an
//! odd number of placeable dominoes tends to hand that side the last move
//! in the line, an even number hands it to the opponent. Lines with fewer
//! than two empty cells are dead and absent from every table, so they
//! score 0.
//!
//! The constants are hand-tuned and carry no correctness weight; only the
//! exact ±WIN scoring of terminal positions does.

use super::WIN;

/// Tuned entries for 4×4: (empty cells in line, score)
const TABLE_4: &[(usize, i32)] = &[(2, 30), (3, 12), (4, -40)];

/// Tuned entries for 6×6
const TABLE_6: &[(usize, i32)] = &[(2, 30), (3, 12), (4, -25), (5, -10), (6, 40)];

/// Tuned entries for 8×8
const TABLE_8: &[(usize, i32)] = &[
    (2, 30),
    (3, 12),
    (4, -25),
    (5, -10),
    (6, 20),
    (7, 8),
    (8, -35),
];

/// Line score lookup for one board size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTable {
    size: usize,
    /// Indexed by empty count, `0..=size`
    scores: Vec<i32>,
}

impl LineTable {
    /// Table for an `size`×`size` board.
    ///
    /// Sizes 4, 6 and 8 use the tuned tables; other sizes get a parity
    /// table built by [`LineTable::parity`].
    pub fn for_size(size: usize) -> Self {
        match size {
            4 => Self::from_entries(size, TABLE_4),
            6 => Self::from_entries(size, TABLE_6),
            8 => Self::from_entries(size, TABLE_8),
            _ => Self::parity(size),
        }
    }

    /// Build a table from sparse `(empty_count, score)` entries.
    ///
    /// Counts above `size` are dropped; missing counts score 0.
    pub fn from_entries(size: usize, entries: &[(usize, i32)]) -> Self {
        let mut scores = vec![0; size + 1];
        for &(empty, score) in entries {
            if let Some(slot) = scores.get_mut(empty) {
                *slot = score;
            }
        }
        Self { size, scores }
    }

    /// Generic table: sign follows the parity of `empty / 2`, even counts
    /// weigh more than odd ones, and the weight shrinks as the line fills.
    pub fn parity(size: usize) -> Self {
        let mut scores = vec![0; size + 1];
        for (empty, slot) in scores.iter_mut().enumerate().skip(2) {
            let sign = if (empty / 2) % 2 == 1 { 1 } else { -1 };
            let weight = if empty % 2 == 0 { 30 } else { 10 };
            *slot = sign * weight;
        }
        Self { size, scores }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Score of a line with `empty` uncovered cells; 0 when not tabulated.
    #[inline]
    pub fn score(&self, empty: usize) -> i32 {
        self.scores.get(empty).copied().unwrap_or(0)
    }

    /// Largest absolute value any single board can reach with this table.
    pub fn max_magnitude(&self) -> i64 {
        let widest = self.scores.iter().map(|s| i64::from(s.abs())).max().unwrap_or(0);
        widest * 2 * self.size as i64
    }

    /// True if no board can score ±WIN or beyond
    pub fn is_bounded(&self) -> bool {
        self.max_magnitude() < i64::from(WIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_lines_score_zero() {
        for size in [4, 6, 8, 10] {
            let table = LineTable::for_size(size);
            assert_eq!(table.score(0), 0);
            assert_eq!(table.score(1), 0);
        }
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        let table = LineTable::for_size(4);
        assert_eq!(table.score(5), 0);
        assert_eq!(table.score(100), 0);
    }

    #[test]
    fn test_tuned_tables_used() {
        assert_eq!(LineTable::for_size(4).score(2), 30);
        assert_eq!(LineTable::for_size(6).score(6), 40);
        assert_eq!(LineTable::for_size(8).score(8), -35);
    }

    #[test]
    fn test_parity_table_signs() {
        let table = LineTable::parity(10);
        assert!(table.score(2) > 0); // one domino
        assert!(table.score(4) < 0); // two dominoes
        assert!(table.score(6) > 0);
        assert!(table.score(2).abs() > table.score(3).abs());
    }

    #[test]
    fn test_from_entries_ignores_oversized_counts() {
        let table = LineTable::from_entries(2, &[(2, 5), (9, 99)]);
        assert_eq!(table.score(2), 5);
        assert_eq!(table.score(9), 0);
    }

    #[test]
    fn test_tables_stay_below_win() {
        for size in (2..=40).step_by(2) {
            assert!(LineTable::for_size(size).is_bounded(), "size {size}");
        }
    }
}
