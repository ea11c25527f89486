//! Plain-text export of generated rounds
//!
//! Boards and options are written one grid row per line, live cells as `#`
//! and dead cells as `.`. Options are numbered from 1, the way the player
//! sees them.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::algorithm::round::Round;
use crate::io::error::{Result, file_system_error};

/// Text view of one round in its batch
///
/// `number` is the 1-based position of the round in its batch. With
/// `reveal`, the answer and its planted anchor are included.
#[derive(Clone, Copy, Debug)]
pub struct RoundText<'a> {
    /// Position of the round in its batch, from 1
    pub number: usize,
    /// Round to render
    pub round: &'a Round,
    /// Whether to include the answer
    pub reveal: bool,
}

impl fmt::Display for RoundText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.round.board();
        writeln!(f, "round {} ({}x{})", self.number, board.rows(), board.cols())?;
        writeln!(f, "{board}")?;
        for (index, option) in self.round.options().iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "option {}:", index + 1)?;
            writeln!(f, "{option}")?;
        }

        if self.reveal {
            writeln!(f)?;
            writeln!(
                f,
                "answer: option {} at {}",
                self.round.correct_index() + 1,
                self.round.planted()
            )?;
        }

        let report = self.round.report();
        if !report.is_resolved() {
            writeln!(
                f,
                "warning: {} residual conflict(s)",
                report.residual_conflicts
            )?;
        }
        Ok(())
    }
}

/// Render one round as text, see [`RoundText`]
pub fn format_round(number: usize, round: &Round, reveal: bool) -> String {
    RoundText {
        number,
        round,
        reveal,
    }
    .to_string()
}

/// Write a batch of rounds, separated by blank lines
///
/// # Errors
///
/// Returns the writer's error if any write or the final flush fails
pub fn write_rounds<W: Write>(writer: &mut W, rounds: &[Round], reveal: bool) -> io::Result<()> {
    for (index, round) in rounds.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        let text = RoundText {
            number: index + 1,
            round,
            reveal,
        };
        write!(writer, "{text}")?;
    }
    writer.flush()
}

/// Write a batch of rounds to a file, creating parent directories
///
/// # Errors
///
/// Returns an error naming `output_path` (or its parent) if:
/// - The parent directory cannot be created
/// - The file cannot be created or written
pub fn export_rounds(rounds: &[Round], reveal: bool, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
    }

    let file =
        File::create(output_path).map_err(|e| file_system_error(output_path, "create file", e))?;
    let mut writer = BufWriter::new(file);
    write_rounds(&mut writer, rounds, reveal)
        .map_err(|e| file_system_error(output_path, "write", e))
}
