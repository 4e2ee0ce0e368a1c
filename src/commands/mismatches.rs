//! Count mismatches between two equal-length sequences.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use fgseq_lib::sequences::{count_mismatches, mismatches_within};
use log::info;

use crate::commands::command::Command;
use crate::commands::common::OutputOptions;

/// Count the positions at which two equal-length sequences differ.
#[derive(Debug, Parser)]
#[command(
    name = "mismatches",
    about = "\x1b[38;5;30m[COMPARISON]\x1b[0m     \x1b[36mCount mismatches between two equal-length sequences\x1b[0m",
    long_about = r#"
Count mismatches between two equal-length sequences.

Bases are compared position by position after upper-casing; IUPAC codes are not expanded.
Sequences of different lengths are an error.

With --max the comparison stops as soon as more than that many mismatches are seen and
prints "true" if the sequences are within the threshold, "false" otherwise.

Example usage:
  fgseq mismatches ACGTACGT ACGTTCGT
  fgseq mismatches --max 1 ACGTACGT acgtacga
"#
)]
pub struct Mismatches {
    /// First sequence
    #[arg(value_name = "SEQ1")]
    pub first: String,

    /// Second sequence
    #[arg(value_name = "SEQ2")]
    pub second: String,

    /// Report only whether the sequences differ by at most this many positions
    #[arg(long = "max")]
    pub max: Option<usize>,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl Command for Mismatches {
    fn execute(&self) -> Result<()> {
        info!("Starting Mismatches");
        let (s1, s2) = (self.first.as_bytes(), self.second.as_bytes());

        let mut writer = self.output.writer()?;
        match self.max {
            Some(max) => {
                info!("Maximum mismatches: {max}");
                let within = mismatches_within(s1, s2, max)?;
                writeln!(writer, "{within}")?;
            }
            None => {
                let count = count_mismatches(s1, s2)?;
                info!("Found {count} mismatches over {} bases", s1.len());
                writeln!(writer, "{count}")?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
