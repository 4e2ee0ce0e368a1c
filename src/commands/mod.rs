//! CLI command implementations for fgseq.
//!
//! Each submodule implements one subcommand. Sequences are always supplied as positional
//! arguments; no sequence files are read.
//!
//! - [`scan`] - Report the longest homopolymer and dinucleotide runs of each sequence
//! - [`mismatches`] - Count mismatches between two equal-length sequences
//! - [`revcomp`] - Reverse complement (or complement) sequences

pub mod command;
pub mod common;
pub mod mismatches;
pub mod revcomp;
pub mod scan;
