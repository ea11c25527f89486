//! Round orchestration: options, board, planted location and sanitization
//!
//! Each round is built from fresh values and handed out as an immutable
//! snapshot. Nothing is shared between rounds except the random number
//! generator, so a failed round leaves no trace on the next one.

use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::generator::PatternGenerator;
use crate::algorithm::sanitize::{SanitizeReport, sanitize_board};
use crate::io::configuration::{ConflictPolicy, GenerationConfig, PATTERN_SIZE};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::board::{Board, Coordinate};
use crate::spatial::pattern::Pattern;

/// One complete puzzle round
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    board: Board,
    options: Vec<Pattern>,
    correct: Pattern,
    correct_index: usize,
    planted: Coordinate,
    report: SanitizeReport,
}

impl Round {
    /// Final board shown to the player
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Options in display order
    pub fn options(&self) -> &[Pattern] {
        &self.options
    }

    /// Index of the correct option
    pub const fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The correct option
    pub const fn correct_pattern(&self) -> &Pattern {
        &self.correct
    }

    /// Anchor of the planted correct pattern
    pub const fn planted(&self) -> Coordinate {
        self.planted
    }

    /// Options other than the correct one, in display order
    pub fn decoys(&self) -> Vec<Pattern> {
        decoys_of(&self.options, self.correct_index)
    }

    /// Sanitizer outcome for this round's board
    pub const fn report(&self) -> &SanitizeReport {
        &self.report
    }
}

fn decoys_of(options: &[Pattern], correct_index: usize) -> Vec<Pattern> {
    options
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != correct_index)
        .map(|(_, pattern)| *pattern)
        .collect()
}

/// Seeded producer of puzzle rounds
///
/// The seed fully determines the sequence of rounds produced.
pub struct RoundGenerator {
    config: GenerationConfig,
    patterns: PatternGenerator,
    rng: StdRng,
}

impl RoundGenerator {
    /// Create a deterministic round generator
    ///
    /// Board dimensions are clamped to the supported range; every other
    /// parameter is validated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: GenerationConfig, seed: u64) -> Result<Self> {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Create a round generator drawing from an existing random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn from_rng(config: GenerationConfig, rng: StdRng) -> Result<Self> {
        let config = config.clamped();
        let patterns = PatternGenerator::from_config(&config)?;
        Ok(Self {
            config,
            patterns,
            rng,
        })
    }

    /// Effective configuration after clamping
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Build one round, keeping it whatever the sanitizer leaves behind
    ///
    /// # Errors
    ///
    /// Returns `GenerationExhausted` if no option set can be generated
    pub fn new_round(&mut self) -> Result<Round> {
        let GenerationConfig {
            rows,
            cols,
            option_count,
            min_distance,
            sweep_passes,
            ..
        } = self.config;

        let options =
            self.patterns
                .generate_distinct_set(option_count, min_distance, &mut self.rng)?;
        let Some((correct_index, correct)) =
            options.iter().copied().enumerate().choose(&mut self.rng)
        else {
            return Err(invalid_parameter(
                "option_count",
                &option_count,
                &"at least one option is required",
            ));
        };

        let mut board = Board::fill_random(rows, cols, &mut self.rng);
        let planted = Coordinate::new(
            self.rng.random_range(0..=rows - PATTERN_SIZE),
            self.rng.random_range(0..=cols - PATTERN_SIZE),
        );
        board.stamp(planted, &correct);

        let decoys = decoys_of(&options, correct_index);
        let report = sanitize_board(&mut board, &correct, &decoys, planted, sweep_passes);

        Ok(Round {
            board,
            options,
            correct,
            correct_index,
            planted,
            report,
        })
    }

    /// Build one round and apply the configured conflict policy
    ///
    /// # Errors
    ///
    /// Returns `GenerationExhausted` if no option set can be generated, and
    /// `UnresolvedConflict` when the policy refuses the remaining conflicts
    pub fn generate(&mut self) -> Result<Round> {
        let attempts = match self.config.conflict_policy {
            ConflictPolicy::Regenerate => self.config.max_round_attempts,
            ConflictPolicy::Accept | ConflictPolicy::Reject => 1,
        };

        let mut last_report = SanitizeReport::default();
        for _ in 0..attempts {
            let round = self.new_round()?;
            if self.config.conflict_policy == ConflictPolicy::Accept || round.report.is_resolved()
            {
                return Ok(round);
            }
            last_report = round.report;
        }

        Err(GenerationError::UnresolvedConflict {
            remaining: last_report.residual_conflicts,
            passes: last_report.passes,
        })
    }
}

impl Iterator for RoundGenerator {
    type Item = Result<Round>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}
