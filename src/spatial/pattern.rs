//! Fixed 3x3 binary patterns
//!
//! A pattern is the shape the player has to find on the board. Patterns are
//! plain values: two patterns are the same pattern exactly when their cells
//! are equal.

use std::fmt;

use crate::io::configuration::{DEAD_CELL_CHAR, LIVE_CELL_CHAR, PATTERN_CELLS, PATTERN_SIZE};

/// Raw cell layout of a pattern, indexed `[row][col]`
pub type Cells = [[bool; PATTERN_SIZE]; PATTERN_SIZE];

/// Immutable 3x3 grid of live/dead cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Cells,
}

impl Pattern {
    /// Create a pattern from its cells
    pub const fn new(cells: Cells) -> Self {
        Self { cells }
    }

    /// Create a pattern from the low nine bits of `bits`
    ///
    /// Bit `row * 3 + col` holds the cell at `(row, col)`.
    pub fn from_bits(bits: u16) -> Self {
        let mut cells = [[false; PATTERN_SIZE]; PATTERN_SIZE];
        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_row.iter_mut().enumerate() {
                *cell = (bits >> (row * PATTERN_SIZE + col)) & 1 == 1;
            }
        }
        Self { cells }
    }

    /// Pack the cells into the layout used by [`Pattern::from_bits`]
    pub fn to_bits(&self) -> u16 {
        self.iter()
            .filter(|&(_, _, live)| live)
            .fold(0, |bits, (row, col, _)| bits | 1_u16 << (row * PATTERN_SIZE + col))
    }

    /// Access the raw cells
    pub const fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Cell value at `(row, col)`, `None` outside the pattern
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate over `(row, col, live)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &live)| (row, col, live))
        })
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.iter().filter(|&(_, _, live)| live).count()
    }

    /// Hamming distance to another pattern
    pub fn distance(&self, other: &Self) -> usize {
        self.iter()
            .zip(other.iter())
            .filter(|((_, _, a), (_, _, b))| a != b)
            .count()
    }

    /// Whether the pattern has all cells equal
    pub fn is_uniform(&self) -> bool {
        let live = self.live_count();
        live == 0 || live == PATTERN_CELLS
    }
}

/// Count of differing cells between two patterns
pub fn pattern_distance(a: &Pattern, b: &Pattern) -> usize {
    a.distance(b)
}

impl From<Cells> for Pattern {
    fn from(cells: Cells) -> Self {
        Self::new(cells)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &live in row {
                let symbol = if live { LIVE_CELL_CHAR } else { DEAD_CELL_CHAR };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}
