//! Common CLI options shared across commands.
//!
//! This module provides shared argument structures that can be composed into
//! command structs using `#[command(flatten)]`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Positional sequences given on the command line.
#[derive(Debug, Clone, Args)]
pub struct SequenceArgs {
    /// One or more DNA/RNA sequences (IUPAC codes allowed, case-insensitive)
    #[arg(value_name = "SEQ", required = true)]
    pub sequences: Vec<String>,
}

/// Optional output file; standard output is used when absent.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputOptions {
    /// Output file (defaults to standard output)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

impl OutputOptions {
    /// Opens a buffered writer to the output file, or to standard output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn writer(&self) -> Result<BufWriter<Box<dyn Write>>> {
        let inner: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            ),
            None => Box::new(io::stdout().lock()),
        };
        Ok(BufWriter::new(inner))
    }

    /// Human-readable name of the output destination, for logging.
    #[must_use]
    pub fn describe(&self) -> String {
        self.output.as_ref().map_or_else(|| "<stdout>".to_string(), |p| p.display().to_string())
    }
}
