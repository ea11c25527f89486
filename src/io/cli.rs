//! Command-line interface for batch generation of puzzle rounds

use crate::algorithm::round::{Round, RoundGenerator};
use crate::io::configuration::{
    ConflictPolicy, DEFAULT_COLS, DEFAULT_MAX_LIVE, DEFAULT_MIN_DISTANCE, DEFAULT_MIN_LIVE,
    DEFAULT_ROUND_COUNT, DEFAULT_ROWS, GenerationConfig,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::export::{export_rounds, write_rounds};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patternspot")]
#[command(
    author,
    version,
    about = "Generate spot-the-pattern puzzle rounds"
)]
/// Command-line arguments for the round generation tool
pub struct Cli {
    /// Board rows (clamped to 8..=60)
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Board columns (clamped to 8..=60)
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Number of rounds to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROUND_COUNT)]
    pub rounds: usize,

    /// Random seed for reproducible generation (drawn from entropy if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Minimum number of differing cells between any two options
    #[arg(short = 'd', long, default_value_t = DEFAULT_MIN_DISTANCE)]
    pub min_distance: usize,

    /// Fewest live cells in a generated pattern
    #[arg(long, default_value_t = DEFAULT_MIN_LIVE)]
    pub min_live: usize,

    /// Most live cells in a generated pattern
    #[arg(long, default_value_t = DEFAULT_MAX_LIVE)]
    pub max_live: usize,

    /// What to do with boards that keep decoy occurrences
    #[arg(short, long, value_enum, default_value_t = ConflictPolicy::Regenerate)]
    pub policy: ConflictPolicy,

    /// Include the answer and its location in the output
    #[arg(long)]
    pub reveal: bool,

    /// Write rounds to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress and diagnostic output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress and diagnostics should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation configuration described by the arguments, dimensions clamped
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            rows: self.rows,
            cols: self.cols,
            min_distance: self.min_distance,
            min_live: self.min_live,
            max_live: self.max_live,
            conflict_policy: self.policy,
            ..GenerationConfig::default()
        }
        .clamped()
    }
}

/// Generates a batch of rounds and writes them out
pub struct RoundProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RoundProcessor {
    /// Create a new round processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and write rounds according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid, a round cannot be
    /// generated, or the output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let seed = self.cli.seed.unwrap_or_else(rand::random);
        self.report_settings(seed);

        let rounds = self.generate_rounds(seed)?;

        match self.cli.output {
            Some(ref path) => export_rounds(&rounds, self.cli.reveal, path),
            None => write_rounds(&mut std::io::stdout().lock(), &rounds, self.cli.reveal)
                .map_err(|e| file_system_error("<stdout>", "write", e)),
        }
    }

    /// Generate the requested number of rounds from `seed`
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or a round cannot be
    /// generated under the selected policy
    pub fn generate_rounds(&mut self, seed: u64) -> Result<Vec<Round>> {
        if self.cli.rounds == 0 {
            return Err(invalid_parameter(
                "rounds",
                &self.cli.rounds,
                &"at least one round must be generated",
            ));
        }

        let mut generator = RoundGenerator::new(self.cli.generation_config(), seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.rounds);
        }

        let mut rounds = Vec::with_capacity(self.cli.rounds);
        for number in 1..=self.cli.rounds {
            let round = generator.generate()?;
            if let Some(ref mut pm) = self.progress_manager {
                if !round.report().is_resolved() {
                    pm.record_conflict();
                    Self::warn_conflicts(number, &round);
                }
                pm.complete_round();
            }
            rounds.push(round);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(rounds)
    }

    // Allow print for user feedback on the effective settings
    #[allow(clippy::print_stderr)]
    fn report_settings(&self, seed: u64) {
        if !self.cli.should_show_progress() {
            return;
        }

        let config = self.cli.generation_config();
        if config.rows != self.cli.rows || config.cols != self.cli.cols {
            eprintln!(
                "Board size {}x{} clamped to {}x{}",
                self.cli.rows, self.cli.cols, config.rows, config.cols
            );
        }
        eprintln!("Seed: {seed}");
    }

    // Allow print for user feedback on ambiguous boards
    #[allow(clippy::print_stderr)]
    fn warn_conflicts(number: usize, round: &Round) {
        let report = round.report();
        eprintln!(
            "Warning: round {number} kept {} decoy occurrence(s) after {} passes",
            report.residual_conflicts, report.passes
        );
    }
}
