//! Progress display for multi-round batches

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROUND_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Rounds: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks rounds generated in a batch
///
/// Nothing is drawn until [`ProgressManager::initialize`] is called, and
/// single-round batches never show a bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    conflicts: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            conflicts: 0,
        }
    }

    /// Set up the bar for a batch of `round_count` rounds
    pub fn initialize(&mut self, round_count: usize) {
        if round_count > 1 {
            let bar = ProgressBar::new(round_count as u64);
            bar.set_style(ROUND_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Record a finished round
    pub fn complete_round(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Record a round whose board kept conflicts
    pub fn record_conflict(&mut self) {
        self.conflicts += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("({} with conflicts)", self.conflicts));
        }
    }

    /// Rounds recorded with conflicts so far
    pub const fn conflict_count(&self) -> usize {
        self.conflicts
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
