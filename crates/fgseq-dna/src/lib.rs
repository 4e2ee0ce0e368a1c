#![deny(unsafe_code)]

//! Base-level DNA/RNA utilities.
//!
//! This crate provides the per-base primitives the sequence scanners are built on:
//! - Case-insensitive base equality (IUPAC codes compared literally)
//! - IUPAC-aware complement of single bases and whole sequences
//! - Reverse-complement, both allocating and in place

pub mod dna;

// Re-export submodule contents at crate root for convenience
pub use dna::{
    bases_equal, complement, complement_base, complement_in_place, complement_str,
    reverse_complement, reverse_complement_in_place, reverse_complement_str,
};

/// Uppercase IUPAC nucleotide codes, including `U` for RNA.
pub const IUPAC_BASES: &[u8] = b"ACGTURYSWKMBDHVN";

/// No-call base character.
pub const NO_CALL_BASE: u8 = b'N';
