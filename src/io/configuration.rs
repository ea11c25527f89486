//! Generation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Side length of every pattern (patterns are always square)
pub const PATTERN_SIZE: usize = 3;

/// Number of cells in a pattern
pub const PATTERN_CELLS: usize = PATTERN_SIZE * PATTERN_SIZE;

// Smallest board that still leaves a margin around a planted pattern
/// Minimum board dimension accepted after clamping
pub const MIN_BOARD_DIMENSION: usize = 8;
/// Maximum board dimension accepted after clamping
pub const MAX_BOARD_DIMENSION: usize = 60;

/// Default number of board rows
pub const DEFAULT_ROWS: usize = 16;
/// Default number of board columns
pub const DEFAULT_COLS: usize = 9;

/// Number of options shown to the player
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Minimum Hamming distance between any two options
pub const DEFAULT_MIN_DISTANCE: usize = 4;

/// Fewest live cells a generated pattern may have
pub const DEFAULT_MIN_LIVE: usize = 2;
/// Most live cells a generated pattern may have
pub const DEFAULT_MAX_LIVE: usize = 7;

/// Candidates drawn per attempt at building a distinct set
pub const DEFAULT_CANDIDATE_BUDGET: usize = 5000;

/// Times a distinct set is rebuilt from scratch before giving up
pub const DEFAULT_MAX_RESTARTS: usize = 16;

/// Draws allowed for a single pattern before giving up
pub const DEFAULT_MAX_PATTERN_DRAWS: usize = 10_000;

/// Full four-direction passes made by the sanitizer
pub const DEFAULT_SWEEP_PASSES: usize = 5;

/// Rounds attempted under [`ConflictPolicy::Regenerate`]
pub const DEFAULT_MAX_ROUND_ATTEMPTS: usize = 8;

/// Rounds produced by one CLI invocation
pub const DEFAULT_ROUND_COUNT: usize = 1;

/// Character used for live cells in text output
pub const LIVE_CELL_CHAR: char = '#';
/// Character used for dead cells in text output
pub const DEAD_CELL_CHAR: char = '.';

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// What to do with a round whose board still contains decoy occurrences
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ConflictPolicy {
    /// Keep the round and record the residual conflicts in its report
    Accept,
    /// Fail the round with an unresolved conflict error
    Reject,
    /// Throw the round away and build a fresh one
    #[default]
    Regenerate,
}

/// Parameters controlling pattern, board and round generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Board rows
    pub rows: usize,
    /// Board columns
    pub cols: usize,
    /// Number of options, exactly one of which is correct
    pub option_count: usize,
    /// Minimum pairwise Hamming distance between options
    pub min_distance: usize,
    /// Inclusive lower bound on live cells per pattern
    pub min_live: usize,
    /// Inclusive upper bound on live cells per pattern
    pub max_live: usize,
    /// Candidates drawn per distinct-set attempt
    pub candidate_budget: usize,
    /// Distinct-set restarts before failing
    pub max_restarts: usize,
    /// Draws per single pattern before failing
    pub max_pattern_draws: usize,
    /// Sanitizer iteration cap
    pub sweep_passes: usize,
    /// Handling of boards that keep decoy occurrences
    pub conflict_policy: ConflictPolicy,
    /// Rounds tried under [`ConflictPolicy::Regenerate`]
    pub max_round_attempts: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            option_count: DEFAULT_OPTION_COUNT,
            min_distance: DEFAULT_MIN_DISTANCE,
            min_live: DEFAULT_MIN_LIVE,
            max_live: DEFAULT_MAX_LIVE,
            candidate_budget: DEFAULT_CANDIDATE_BUDGET,
            max_restarts: DEFAULT_MAX_RESTARTS,
            max_pattern_draws: DEFAULT_MAX_PATTERN_DRAWS,
            sweep_passes: DEFAULT_SWEEP_PASSES,
            conflict_policy: ConflictPolicy::default(),
            max_round_attempts: DEFAULT_MAX_ROUND_ATTEMPTS,
        }
    }
}

impl GenerationConfig {
    /// Create a default configuration for a board of the given size
    ///
    /// Dimensions are clamped, see [`clamp_dimension`].
    pub fn with_dimensions(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
        .clamped()
    }

    /// Return a copy with both board dimensions clamped to the supported range
    #[must_use]
    pub const fn clamped(mut self) -> Self {
        self.rows = clamp_dimension(self.rows);
        self.cols = clamp_dimension(self.cols);
        self
    }

    /// Check every non-dimension parameter
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first parameter out of range
    pub fn validate(&self) -> Result<()> {
        if self.option_count < 2 {
            return Err(invalid_parameter(
                "option_count",
                &self.option_count,
                &"at least one correct option and one decoy are required",
            ));
        }
        if self.min_distance > PATTERN_CELLS {
            return Err(invalid_parameter(
                "min_distance",
                &self.min_distance,
                &format!("patterns only have {PATTERN_CELLS} cells"),
            ));
        }
        validate_live_bounds(self.min_live, self.max_live)?;
        for (parameter, value) in [
            ("candidate_budget", self.candidate_budget),
            ("max_restarts", self.max_restarts),
            ("max_pattern_draws", self.max_pattern_draws),
            ("sweep_passes", self.sweep_passes),
            ("max_round_attempts", self.max_round_attempts),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }
        Ok(())
    }
}

/// Clamp a board dimension into the supported range
pub const fn clamp_dimension(value: usize) -> usize {
    if value < MIN_BOARD_DIMENSION {
        MIN_BOARD_DIMENSION
    } else if value > MAX_BOARD_DIMENSION {
        MAX_BOARD_DIMENSION
    } else {
        value
    }
}

/// Check live-cell bounds for generated patterns
///
/// All-dead and all-live patterns are never allowed, so the bounds must
/// satisfy `1 <= min_live <= max_live <= 8`.
///
/// # Errors
///
/// Returns `InvalidParameter` when the bounds are out of order or admit
/// a uniform pattern
pub fn validate_live_bounds(min_live: usize, max_live: usize) -> Result<()> {
    if min_live == 0 {
        return Err(invalid_parameter(
            "min_live",
            &min_live,
            &"an all-dead pattern is never a valid option",
        ));
    }
    if max_live >= PATTERN_CELLS {
        return Err(invalid_parameter(
            "max_live",
            &max_live,
            &"an all-live pattern is never a valid option",
        ));
    }
    if min_live > max_live {
        return Err(invalid_parameter(
            "min_live",
            &min_live,
            &format!("exceeds max_live ({max_live})"),
        ));
    }
    Ok(())
}
