//! Directional sweeps that break accidental decoy occurrences
//!
//! A sweep visits every valid anchor in a fixed row/column order, starting
//! from one corner of the board. When a decoy matches at an anchor, a single
//! "tell" cell of the matched region is inverted. Each of the four sweeps
//! uses a different corner of the region as its tell, so repeated repairs
//! land on different cells instead of hammering the same one.

use crate::spatial::board::{Board, Coordinate};
use crate::spatial::mask::CellMask;
use crate::spatial::pattern::Pattern;

/// Order in which one axis is walked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// From index 0 up to the last anchor
    Ascending,
    /// From the last anchor down to index 0
    Descending,
}

impl Traversal {
    /// Index visited at `step` when the last valid anchor index is `last`
    pub const fn index(self, step: usize, last: usize) -> usize {
        match self {
            Self::Ascending => step,
            Self::Descending => last - step,
        }
    }
}

/// Corner of a 3x3 region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// Anchor cell
    TopLeft,
    /// Last cell of the first row
    TopRight,
    /// First cell of the last row
    BottomLeft,
    /// Last cell of the last row
    BottomRight,
}

impl Corner {
    /// Board cell of this corner for the region anchored at `anchor`
    pub const fn cell(self, anchor: Coordinate) -> Coordinate {
        match self {
            Self::TopLeft => anchor,
            Self::TopRight => anchor.offset(0, 2),
            Self::BottomLeft => anchor.offset(2, 0),
            Self::BottomRight => anchor.offset(2, 2),
        }
    }
}

/// One directional sweep: traversal order per axis and the tell corner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweepSpec {
    /// Short label, named after the start and end corners
    pub name: &'static str,
    /// Row traversal
    pub rows: Traversal,
    /// Column traversal
    pub cols: Traversal,
    /// Region corner flipped when a decoy matches
    pub tell: Corner,
}

/// The four sweeps, applied in this order on every pass
pub const SWEEPS: [SweepSpec; 4] = [
    SweepSpec {
        name: "TL_BR",
        rows: Traversal::Ascending,
        cols: Traversal::Ascending,
        tell: Corner::BottomRight,
    },
    SweepSpec {
        name: "TR_BL",
        rows: Traversal::Ascending,
        cols: Traversal::Descending,
        tell: Corner::BottomLeft,
    },
    SweepSpec {
        name: "BL_TR",
        rows: Traversal::Descending,
        cols: Traversal::Ascending,
        tell: Corner::TopRight,
    },
    SweepSpec {
        name: "BR_TL",
        rows: Traversal::Descending,
        cols: Traversal::Descending,
        tell: Corner::TopLeft,
    },
];

impl SweepSpec {
    /// Anchors visited by this sweep on a board whose last valid anchor is `last`
    ///
    /// Rows form the outer loop, columns the inner loop.
    pub fn anchors(self, last: Coordinate) -> impl Iterator<Item = Coordinate> {
        (0..=last.row).flat_map(move |row_step| {
            let row = self.rows.index(row_step, last.row);
            (0..=last.col).map(move |col_step| {
                Coordinate::new(row, self.cols.index(col_step, last.col))
            })
        })
    }

    /// Cell to invert for a match anchored at `anchor`
    pub const fn tell_cell(self, anchor: Coordinate) -> Coordinate {
        self.tell.cell(anchor)
    }

    /// Run this sweep once, returning the number of cells inverted
    ///
    /// At each anchor other than `except`, decoys are tried in order and the
    /// first match wins. Its tell cell is inverted unless the blacklist holds
    /// it, in which case the anchor is left as it is.
    pub fn run(
        self,
        board: &mut Board,
        decoys: &[Pattern],
        except: Option<Coordinate>,
        blacklist: &CellMask,
    ) -> usize {
        let Some(last) = board.last_anchor() else {
            return 0;
        };

        let mut flips = 0;
        for anchor in self.anchors(last) {
            if except == Some(anchor) {
                continue;
            }
            if decoys.iter().any(|decoy| board.matches_at(anchor, decoy)) {
                let tell = self.tell_cell(anchor);
                if !blacklist.contains(tell) && board.toggle(tell).is_some() {
                    flips += 1;
                }
            }
        }
        flips
    }
}

/// Run all four sweeps once, returning the number of cells inverted
pub fn sweep_pass(
    board: &mut Board,
    decoys: &[Pattern],
    except: Option<Coordinate>,
    blacklist: &CellMask,
) -> usize {
    SWEEPS
        .iter()
        .map(|sweep| sweep.run(board, decoys, except, blacklist))
        .sum()
}

/// Run all four sweeps once, returning whether any cell changed
pub fn break_all_matches(
    board: &mut Board,
    decoys: &[Pattern],
    except: Option<Coordinate>,
    blacklist: &CellMask,
) -> bool {
    sweep_pass(board, decoys, except, blacklist) > 0
}

/// Anchors other than `except` where any decoy currently matches
pub fn find_conflicts(
    board: &Board,
    decoys: &[Pattern],
    except: Option<Coordinate>,
) -> Vec<Coordinate> {
    board
        .anchors()
        .filter(|&anchor| except != Some(anchor))
        .filter(|&anchor| decoys.iter().any(|decoy| board.matches_at(anchor, decoy)))
        .collect()
}
