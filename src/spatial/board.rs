//! Board storage and 3x3 region operations
//!
//! The board is a dense grid of live/dead cells backed by an ndarray matrix.
//! Regions are addressed by their top-left anchor; an anchor is valid when the
//! whole 3x3 region starting there lies inside the board.

use std::fmt;

use ndarray::Array2;
use rand::Rng;

use crate::io::configuration::{DEAD_CELL_CHAR, LIVE_CELL_CHAR, PATTERN_SIZE};
use crate::spatial::pattern::{Cells, Pattern};

/// Board cell position, also used as the top-left anchor of a region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted down and right by the given amounts
    #[must_use]
    pub const fn offset(self, rows: usize, cols: usize) -> Self {
        Self {
            row: self.row + rows,
            col: self.col + cols,
        }
    }

    /// Cells covered by the 3x3 region anchored here, row-major
    pub fn region_cells(self) -> impl Iterator<Item = Self> {
        (0..PATTERN_SIZE)
            .flat_map(move |dr| (0..PATTERN_SIZE).map(move |dc| self.offset(dr, dc)))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular grid of live/dead cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Create a board with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: bool) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a board with every cell dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, false)
    }

    /// Create a board from a per-cell function
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Coordinate) -> bool) -> Self {
        Self {
            cells: Array2::from_shape_fn((rows, cols), |(row, col)| {
                f(Coordinate::new(row, col))
            }),
        }
    }

    /// Create a board of independent uniform random cells
    ///
    /// No constraint is enforced; the result is noise only.
    pub fn fill_random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self::from_fn(rows, cols, |_| rng.random::<bool>())
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Board dimensions (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Read-only access to the underlying matrix
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Cell value, `None` outside the board
    pub fn get(&self, coord: Coordinate) -> Option<bool> {
        self.cells.get((coord.row, coord.col)).copied()
    }

    /// Set a cell, returning whether the coordinate was inside the board
    pub fn set(&mut self, coord: Coordinate, value: bool) -> bool {
        self.cells
            .get_mut((coord.row, coord.col))
            .map(|cell| *cell = value)
            .is_some()
    }

    /// Invert a cell, returning its new value
    pub fn toggle(&mut self, coord: Coordinate) -> Option<bool> {
        self.cells.get_mut((coord.row, coord.col)).map(|cell| {
            *cell = !*cell;
            *cell
        })
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&live| live).count()
    }

    /// Largest valid anchor, `None` when the board is smaller than a pattern
    pub fn last_anchor(&self) -> Option<Coordinate> {
        let row = self.rows().checked_sub(PATTERN_SIZE)?;
        let col = self.cols().checked_sub(PATTERN_SIZE)?;
        Some(Coordinate::new(row, col))
    }

    /// Whether the region anchored at `anchor` lies inside the board
    pub fn fits(&self, anchor: Coordinate) -> bool {
        self.last_anchor()
            .is_some_and(|last| anchor.row <= last.row && anchor.col <= last.col)
    }

    /// Every valid anchor in row-major order
    pub fn anchors(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let (rows, cols) = self
            .last_anchor()
            .map_or((0, 0), |last| (last.row + 1, last.col + 1));
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
    }

    /// Overwrite the region anchored at `anchor` with `pattern`
    ///
    /// The region must fit inside the board; this is a caller contract and
    /// is only checked in debug builds. Cells falling outside are skipped.
    pub fn stamp(&mut self, anchor: Coordinate, pattern: &Pattern) {
        debug_assert!(
            self.fits(anchor),
            "pattern anchored at {anchor} does not fit a {}x{} board",
            self.rows(),
            self.cols()
        );
        for (dr, dc, live) in pattern.iter() {
            self.set(anchor.offset(dr, dc), live);
        }
    }

    /// Whether the region anchored at `anchor` equals `pattern` cell for cell
    ///
    /// Regions that do not fit inside the board never match.
    pub fn matches_at(&self, anchor: Coordinate, pattern: &Pattern) -> bool {
        pattern
            .iter()
            .all(|(dr, dc, live)| self.get(anchor.offset(dr, dc)) == Some(live))
    }

    /// Copy of the region anchored at `anchor`, `None` when it does not fit
    pub fn region(&self, anchor: Coordinate) -> Option<Pattern> {
        if !self.fits(anchor) {
            return None;
        }
        let mut cells: Cells = [[false; PATTERN_SIZE]; PATTERN_SIZE];
        for (dr, row) in cells.iter_mut().enumerate() {
            for (dc, cell) in row.iter_mut().enumerate() {
                *cell = self.get(anchor.offset(dr, dc)).unwrap_or(false);
            }
        }
        Some(Pattern::new(cells))
    }

    /// Number of anchors at which `pattern` occurs
    pub fn count_matches(&self, pattern: &Pattern) -> usize {
        self.anchors()
            .filter(|&anchor| self.matches_at(anchor, pattern))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
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
