//! Spatial data structures for patterns and boards
//!
//! This module contains:
//! - Fixed 3x3 patterns and their distance metric
//! - The board grid with region stamping and matching
//! - Cell masks protecting board regions from modification

/// Board storage, coordinates and region operations
pub mod board;
/// Bitset of protected board cells
pub mod mask;
/// Fixed-size binary patterns
pub mod pattern;

pub use board::{Board, Coordinate};
pub use mask::CellMask;
pub use pattern::Pattern;
