#![deny(unsafe_code)]
#![allow(clippy::cast_precision_loss, clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # fgseq - Sequence Scanning Primitives
//!
//! This library provides low-level scanning primitives over nucleotide sequences (DNA/RNA,
//! including IUPAC ambiguity codes). They are building blocks for read trimming, adapter
//! detection and UMI/barcode correction tooling.
//!
//! ## Overview
//!
//! - **[`sequences`]** - Mismatch counting and longest homopolymer / dinucleotide runs
//! - **[`dna`]** - Base equality, complement and reverse-complement (from `fgseq-dna`)
//! - **[`errors`]** - Error types
//! - **[`logging`]** - Formatting helpers and operation timing for log output
//!
//! ## Quick Start
//!
//! ```
//! use fgseq_lib::dna::reverse_complement;
//! use fgseq_lib::sequences::{count_mismatches, longest_dinuc, longest_homopolymer, Run};
//!
//! # fn main() -> fgseq_lib::errors::Result<()> {
//! let read = b"TTGACACACACGGGGGT";
//!
//! let homopolymer = longest_homopolymer(read);
//! assert_eq!(homopolymer, Run::new(11, 5));
//! assert_eq!(&read[homopolymer.range()], b"GGGGG");
//!
//! let dinuc = longest_dinuc(read);
//! assert_eq!(&read[dinuc.range()], b"ACACACAC");
//!
//! assert_eq!(count_mismatches(b"ACGTN", b"acgan")?, 1);
//! assert_eq!(reverse_complement(b"AACG"), b"CGTT".to_vec());
//! # Ok(())
//! # }
//! ```
//!
//! All operations are pure and hold no shared state, so they can be called concurrently from
//! any number of threads.

pub mod errors;
pub mod logging;
pub mod sequences;

/// Base-level DNA utilities, re-exported from the `fgseq-dna` crate.
pub use fgseq_dna::dna;

pub use errors::{Result, SeqError};
pub use sequences::{
    Run, SequenceScan, count_mismatches, longest_dinuc, longest_homopolymer,
    longest_tandem_repeat, mismatches_within, scan_sequence,
};
