//! Generator for grid-based "spot the pattern" puzzles
//!
//! A round consists of a board of live/dead cells and a set of 3x3 options.
//! Exactly one option is planted on the board; the other options are decoys
//! that look alike and are swept off the board wherever they occur by accident.

#![forbid(unsafe_code)]

/// Pattern generation, conflict sweeping and round orchestration
pub mod algorithm;
/// Configuration, errors, command line and export
pub mod io;
/// Patterns, boards and cell masks
pub mod spatial;

pub use algorithm::round::{Round, RoundGenerator};
pub use io::configuration::{ConflictPolicy, GenerationConfig};
pub use io::error::{GenerationError, Result};
pub use spatial::{Board, Coordinate, Pattern};
