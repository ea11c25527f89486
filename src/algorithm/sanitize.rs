//! Bounded repair loop that keeps the planted pattern and removes decoys
//!
//! The planted region is stamped, protected by a blacklist, and the board is
//! swept pass after pass until a pass changes nothing or the pass cap is
//! reached. The correct pattern is re-stamped after every pass. A board that
//! still changes on the last pass is kept, and its remaining decoy
//! occurrences are counted in the report.

use crate::algorithm::sweep::{find_conflicts, sweep_pass};
use crate::io::error::{GenerationError, Result};
use crate::spatial::board::{Board, Coordinate};
use crate::spatial::mask::CellMask;
use crate::spatial::pattern::Pattern;

/// Outcome of one sanitization run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    /// Passes that were run
    pub passes: usize,
    /// Whether the last pass changed nothing
    pub converged: bool,
    /// Cells inverted over all passes
    pub flips: usize,
    /// Anchors other than the planted one where a decoy still matches
    pub residual_conflicts: usize,
}

impl SanitizeReport {
    /// Whether no decoy occurrence is left on the board
    pub const fn is_resolved(&self) -> bool {
        self.residual_conflicts == 0
    }

    /// Turn residual conflicts into an error
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedConflict` if any decoy occurrence is left
    pub fn ensure_resolved(&self) -> Result<()> {
        if self.is_resolved() {
            Ok(())
        } else {
            Err(GenerationError::UnresolvedConflict {
                remaining: self.residual_conflicts,
                passes: self.passes,
            })
        }
    }
}

/// Plant `correct` at `planted` and sweep decoy occurrences off the board
///
/// Cells of the planted region are never modified by the sweeps. At most
/// `max_passes` passes are run; after each one the correct pattern is
/// stamped again so the planted region always ends up equal to `correct`.
pub fn sanitize_board(
    board: &mut Board,
    correct: &Pattern,
    decoys: &[Pattern],
    planted: Coordinate,
    max_passes: usize,
) -> SanitizeReport {
    board.stamp(planted, correct);
    let blacklist = CellMask::for_region(board.rows(), board.cols(), planted);

    let mut report = SanitizeReport::default();
    while report.passes < max_passes {
        let flips = sweep_pass(board, decoys, Some(planted), &blacklist);
        board.stamp(planted, correct);

        report.passes += 1;
        report.flips += flips;
        report.converged = flips == 0;
        if report.converged {
            break;
        }
    }

    report.residual_conflicts = find_conflicts(board, decoys, Some(planted)).len();
    report
}
