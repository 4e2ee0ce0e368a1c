//! Report the longest homopolymer and dinucleotide-repeat runs of sequences.

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use fgseq_lib::logging::{OperationTimer, log_scan_summary};
use fgseq_lib::sequences::{SequenceScan, scan_sequence};
use log::info;

use crate::commands::command::Command;
use crate::commands::common::{OutputOptions, SequenceArgs};

/// Column names of the scan output, in order.
pub const SCAN_HEADER: [&str; 6] = [
    "sequence",
    "length",
    "homopolymer_offset",
    "homopolymer_length",
    "dinuc_offset",
    "dinuc_length",
];

/// Scan sequences for their longest homopolymer and dinucleotide-repeat runs.
#[derive(Debug, Parser)]
#[command(
    name = "scan",
    about = "\x1b[38;5;72m[SCANNING]\x1b[0m       \x1b[36mFind the longest homopolymer and dinucleotide runs\x1b[0m",
    long_about = r#"
Find the longest homopolymer and dinucleotide-repeat runs in each sequence.

Writes one tab-separated row per sequence with the zero-based offset and the length of the
longest run of a single base and of a repeated two-base unit. Bases are compared
case-insensitively; IUPAC ambiguity codes only match themselves (N does not match A).
When several runs share the maximum length the earliest is reported.

Example usage:
  fgseq scan ACGTTTTTGCACACA
  fgseq scan -o runs.tsv --min-homopolymer 6 ACGTTTTTTG GGGCCC
"#
)]
pub struct Scan {
    /// Sequences to scan
    #[command(flatten)]
    pub input: SequenceArgs,

    /// Output options
    #[command(flatten)]
    pub output: OutputOptions,

    /// Only report sequences whose longest homopolymer is at least this long
    #[arg(long = "min-homopolymer", default_value = "0")]
    pub min_homopolymer: usize,
}

impl Command for Scan {
    fn execute(&self) -> Result<()> {
        info!("Starting Scan");
        info!("Output: {}", self.output.describe());
        if self.min_homopolymer > 0 {
            info!("Minimum homopolymer length: {}", self.min_homopolymer);
        }

        let timer = OperationTimer::new("Scanning sequences");
        let mut writer = self.output.writer()?;
        writeln!(writer, "{}", SCAN_HEADER.join("\t"))?;

        let mut scans = Vec::with_capacity(self.input.sequences.len());
        let mut reported: u64 = 0;
        for seq in &self.input.sequences {
            let scan = scan_sequence(seq.as_bytes());
            if scan.homopolymer.length >= self.min_homopolymer {
                write_row(&mut writer, seq, &scan)?;
                reported += 1;
            }
            scans.push(scan);
        }
        writer.flush()?;

        timer.log_completion(scans.len() as u64);
        log_scan_summary(&scans, reported);
        Ok(())
    }
}

fn write_row<W: Write>(writer: &mut W, seq: &str, scan: &SequenceScan) -> Result<()> {
    writeln!(
        writer,
        "{}\t{}\t{}\t{}\t{}\t{}",
        seq,
        scan.length,
        scan.homopolymer.offset,
        scan.homopolymer.length,
        scan.dinuc.offset,
        scan.dinuc.length
    )?;
    Ok(())
}
