//! Main entry point for the runpak CLI application.
//!
//! This binary provides a command-line interface for extracting
//! `ENDILTLE` .pak archives into a directory tree.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;

use runpak::{Cli, Outcome, PakExtractor};

/// Application entry point.
///
/// Loads the whole archive into memory (the format is parsed from an
/// in-memory buffer), resolves the destination directory, and runs the
/// extractor. An input without the container magic exits nonzero.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let buffer = fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let dest = cli.destination();
    fs::create_dir_all(&dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;

    if !cli.quiet {
        println!("Archive:  {}", cli.file.display());
    }

    match PakExtractor::new(buffer, &dest)
        .extract()
        .with_context(|| format!("failed to extract {}", cli.file.display()))?
    {
        Outcome::Extracted { files } => {
            if !cli.quiet {
                println!("Extracted {} files to {}", files, dest.display());
            }
            Ok(())
        }
        Outcome::NotThisFormat => {
            bail!("{} is not an ENDILTLE archive", cli.file.display())
        }
    }
}
