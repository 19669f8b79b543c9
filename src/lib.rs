//! Core library for multidoc, containing the line-oriented splitter.

pub mod cli;
pub mod error;
pub mod splitter;

use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let input: Box<dyn BufRead> = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(stdin.lock()),
    };

    let stdout = io::stdout();
    let mut output: Box<dyn Write> = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(stdout.lock()),
    };

    splitter::split_to_multidoc(input, &mut output)?;
    output.flush()?;

    Ok(())
}
