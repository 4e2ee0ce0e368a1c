//! Reverse complement or complement sequences.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use fgseq_lib::dna::{complement_str, reverse_complement_str};
use fgseq_lib::logging::OperationTimer;
use log::info;

use crate::commands::command::Command;
use crate::commands::common::{OutputOptions, SequenceArgs};

/// Reverse complement sequences, one output line per input sequence.
#[derive(Debug, Parser)]
#[command(
    name = "revcomp",
    about = "\x1b[38;5;166m[UTILITIES]\x1b[0m      \x1b[36mReverse complement (or complement) sequences\x1b[0m",
    long_about = r#"
Reverse complement sequences, writing one sequence per line.

Case is preserved. IUPAC ambiguity codes are complemented (R<->Y, K<->M, B<->V, D<->H;
S, W and N are unchanged), U complements to A, and any other symbol is passed through.

Example usage:
  fgseq revcomp ACGTTTG
  fgseq revcomp --complement-only acgtRY
"#
)]
pub struct Revcomp {
    /// Sequences to transform
    #[command(flatten)]
    pub input: SequenceArgs,

    /// Complement without reversing
    #[arg(long = "complement-only", default_value = "false")]
    pub complement_only: bool,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl Command for Revcomp {
    fn execute(&self) -> Result<()> {
        let operation = if self.complement_only {
            "Complementing sequences"
        } else {
            "Reverse complementing sequences"
        };
        info!("Output: {}", self.output.describe());
        let timer = OperationTimer::new(operation);

        let transform: fn(&str) -> String =
            if self.complement_only { complement_str } else { reverse_complement_str };

        let mut writer = self.output.writer()?;
        for seq in &self.input.sequences {
            writeln!(writer, "{}", transform(seq))?;
        }
        writer.flush()?;

        timer.log_completion(self.input.sequences.len() as u64);
        Ok(())
    }
}
