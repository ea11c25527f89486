//! CLI entry point for the spot-the-pattern round generator

use clap::Parser;
use patternspot::io::cli::{Cli, RoundProcessor};

fn main() -> patternspot::Result<()> {
    let cli = Cli::parse();
    let mut processor = RoundProcessor::new(cli);
    processor.process()
}
