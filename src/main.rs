//! CLI entry point for the seeded low-poly pattern generator

use clap::Parser;
use polymood::io::cli::{Cli, PatternProcessor};

fn main() -> polymood::Result<()> {
    let cli = Cli::parse();
    let mut processor = PatternProcessor::new(cli);
    processor.process()
}
