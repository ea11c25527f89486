use bitvec::prelude::*;
use std::fmt;

use crate::spatial::board::Coordinate;

/// Fixed-size set of board cells
///
/// Used as the blacklist of cells the sanitizer must never modify. Cells
/// outside the board dimensions are never members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl CellMask {
    /// Create a mask with no cells present
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a mask holding the 3x3 region anchored at `anchor`
    pub fn for_region(rows: usize, cols: usize, anchor: Coordinate) -> Self {
        let mut mask = Self::new(rows, cols);
        for cell in anchor.region_cells() {
            mask.insert(cell);
        }
        mask
    }

    const fn index_of(&self, coord: Coordinate) -> Option<usize> {
        if coord.row < self.rows && coord.col < self.cols {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Add a cell, ignoring coordinates outside the board
    pub fn insert(&mut self, coord: Coordinate) {
        if let Some(index) = self.index_of(coord) {
            self.bits.set(index, true);
        }
    }

    /// Test cell membership
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index_of(coord)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if no cells are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count cells in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Member cells in row-major order
    pub fn cells(&self) -> Vec<Coordinate> {
        self.bits
            .iter_ones()
            .map(|index| Coordinate::new(index / self.cols, index % self.cols))
            .collect()
    }
}

impl fmt::Display for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellMask({} cells: {:?})", self.count(), self.cells())
    }
}
