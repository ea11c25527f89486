//! Random pattern generation with live-cell bounds and pairwise distance
//!
//! Every loop here is bounded. A pattern that cannot meet its live-cell
//! bounds, or a set that cannot be made mutually distant, ends in
//! `GenerationExhausted` instead of retrying forever.

use rand::Rng;

use crate::io::configuration::{
    DEFAULT_CANDIDATE_BUDGET, DEFAULT_MAX_LIVE, DEFAULT_MAX_PATTERN_DRAWS, DEFAULT_MAX_RESTARTS,
    DEFAULT_MIN_LIVE, GenerationConfig, PATTERN_CELLS, PATTERN_SIZE, validate_live_bounds,
};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::pattern::{Cells, Pattern};

pub use crate::spatial::pattern::pattern_distance;

/// Bounded generator for single patterns and mutually distant sets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternGenerator {
    min_live: usize,
    max_live: usize,
    max_pattern_draws: usize,
    candidate_budget: usize,
    max_restarts: usize,
}

impl Default for PatternGenerator {
    fn default() -> Self {
        Self {
            min_live: DEFAULT_MIN_LIVE,
            max_live: DEFAULT_MAX_LIVE,
            max_pattern_draws: DEFAULT_MAX_PATTERN_DRAWS,
            candidate_budget: DEFAULT_CANDIDATE_BUDGET,
            max_restarts: DEFAULT_MAX_RESTARTS,
        }
    }
}

impl PatternGenerator {
    /// Create a generator with the given live-cell bounds and default budgets
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the bounds admit uniform patterns or are
    /// out of order
    pub fn with_live_bounds(min_live: usize, max_live: usize) -> Result<Self> {
        validate_live_bounds(min_live, max_live)?;
        Ok(Self {
            min_live,
            max_live,
            ..Self::default()
        })
    }

    /// Create a generator from the pattern-related part of a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn from_config(config: &GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_live: config.min_live,
            max_live: config.max_live,
            max_pattern_draws: config.max_pattern_draws,
            candidate_budget: config.candidate_budget,
            max_restarts: config.max_restarts,
        })
    }

    /// Inclusive live-cell bounds (min, max)
    pub const fn live_bounds(&self) -> (usize, usize) {
        (self.min_live, self.max_live)
    }

    /// Whether a pattern's live-cell count lies within the bounds
    pub fn accepts(&self, pattern: &Pattern) -> bool {
        (self.min_live..=self.max_live).contains(&pattern.live_count())
    }

    /// Draw one pattern whose live-cell count lies within the bounds
    ///
    /// Each draw fills all nine cells independently; draws outside the
    /// bounds are rejected and redrawn.
    ///
    /// # Errors
    ///
    /// Returns `GenerationExhausted` after `max_pattern_draws` rejected draws
    pub fn generate_pattern<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Pattern> {
        for _ in 0..self.max_pattern_draws {
            let mut cells: Cells = [[false; PATTERN_SIZE]; PATTERN_SIZE];
            for cell in cells.iter_mut().flatten() {
                *cell = rng.random::<bool>();
            }
            let pattern = Pattern::new(cells);
            if self.accepts(&pattern) {
                return Ok(pattern);
            }
        }

        Err(GenerationError::GenerationExhausted {
            stage: "single pattern",
            attempts: self.max_pattern_draws,
        })
    }

    /// Collect `count` patterns whose pairwise distance is at least `min_distance`
    ///
    /// Candidates are accepted greedily. When `candidate_budget` candidates
    /// have been drawn without completing the set, the set is discarded and
    /// rebuilt from scratch, up to `max_restarts` times.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `min_distance` exceeds the pattern size,
    /// and `GenerationExhausted` when every restart fails
    pub fn generate_distinct_set<R: Rng + ?Sized>(
        &self,
        count: usize,
        min_distance: usize,
        rng: &mut R,
    ) -> Result<Vec<Pattern>> {
        if min_distance > PATTERN_CELLS {
            return Err(invalid_parameter(
                "min_distance",
                &min_distance,
                &format!("patterns only have {PATTERN_CELLS} cells"),
            ));
        }

        for _ in 0..self.max_restarts {
            let mut accepted: Vec<Pattern> = Vec::with_capacity(count);
            for _ in 0..self.candidate_budget {
                if accepted.len() == count {
                    break;
                }
                let candidate = self.generate_pattern(rng)?;
                if accepted
                    .iter()
                    .all(|existing| existing.distance(&candidate) >= min_distance)
                {
                    accepted.push(candidate);
                }
            }
            if accepted.len() == count {
                return Ok(accepted);
            }
        }

        Err(GenerationError::GenerationExhausted {
            stage: "distinct pattern set",
            attempts: self.max_restarts,
        })
    }
}
