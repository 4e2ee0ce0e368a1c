//! Scanning primitives over nucleotide sequences.
//!
//! This module provides mismatch counting between equal-length sequences and detection of the
//! longest homopolymer and dinucleotide-repeat runs. Sequences are ASCII byte slices that may
//! contain IUPAC ambiguity codes; matching is case-insensitive and compares symbols literally
//! (see [`bases_equal`]).
//!
//! # Examples
//!
//! ```
//! use fgseq_lib::sequences::{count_mismatches, longest_dinuc, longest_homopolymer, Run};
//!
//! assert_eq!(longest_homopolymer(b"AACCCGT"), Run::new(2, 3));
//! assert_eq!(longest_dinuc(b"ATATATG"), Run::new(0, 6));
//! assert_eq!(count_mismatches(b"ACGT", b"acgA").unwrap(), 1);
//! ```

use std::ops::Range;

use fgseq_dna::bases_equal;

use crate::errors::{Result, SeqError};

/// A matched region of a sequence: a zero-based `offset` and a `length`.
///
/// Runs returned by the scanners always satisfy `offset + length <= seq.len()`. An empty input
/// (or one too short to hold a single repeat unit) yields the default run `(0, 0)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Run {
    /// Index of the first base in the run
    pub offset: usize,
    /// Number of bases in the run
    pub length: usize,
}

impl Run {
    /// Creates a run starting at `offset` and spanning `length` bases.
    #[inline]
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// One past the last base of the run.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// The run as a half-open index range, suitable for slicing the scanned sequence.
    #[inline]
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// True if the run covers no bases.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl From<Run> for (usize, usize) {
    fn from(run: Run) -> Self {
        (run.offset, run.length)
    }
}

impl From<(usize, usize)> for Run {
    fn from((offset, length): (usize, usize)) -> Self {
        Self { offset, length }
    }
}

/// Counts the positions at which two equal-length sequences differ, ignoring case.
///
/// Bases are upper-cased and compared directly; IUPAC codes are not expanded.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] naming both sequences if their lengths differ.
///
/// # Examples
///
/// ```
/// use fgseq_lib::sequences::count_mismatches;
///
/// assert_eq!(count_mismatches(b"ACGT", b"ACGT").unwrap(), 0);
/// assert_eq!(count_mismatches(b"ACGT", b"acgA").unwrap(), 1);
/// assert_eq!(count_mismatches(b"", b"").unwrap(), 0);
/// assert!(count_mismatches(b"ACG", b"ACGT").is_err());
/// ```
pub fn count_mismatches(s1: &[u8], s2: &[u8]) -> Result<usize> {
    if s1.len() != s2.len() {
        return Err(SeqError::length_mismatch(s1, s2));
    }
    Ok(s1.iter().zip(s2).filter(|(a, b)| a.to_ascii_uppercase() != b.to_ascii_uppercase()).count())
}

/// Checks whether two equal-length sequences differ at no more than `max_mismatches` positions.
///
/// Uses the same comparison as [`count_mismatches`] but stops as soon as the threshold is
/// exceeded. Prefer this over `count_mismatches(a, b)? <= max` when only the answer matters.
///
/// # Errors
///
/// Returns [`SeqError::InvalidArgument`] if the sequence lengths differ.
///
/// # Examples
///
/// ```
/// use fgseq_lib::sequences::mismatches_within;
///
/// assert!(mismatches_within(b"ACGT", b"ACTT", 1).unwrap());
/// assert!(!mismatches_within(b"ACGT", b"AATT", 1).unwrap());
/// ```
pub fn mismatches_within(s1: &[u8], s2: &[u8], max_mismatches: usize) -> Result<bool> {
    if s1.len() != s2.len() {
        return Err(SeqError::length_mismatch(s1, s2));
    }

    let mut mismatches = 0;
    for (a, b) in s1.iter().zip(s2) {
        if a.to_ascii_uppercase() != b.to_ascii_uppercase() {
            mismatches += 1;
            if mismatches > max_mismatches {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Finds the longest run of a single repeated base.
///
/// Bases are matched with [`bases_equal`], so the scan is case-insensitive and `N` only matches
/// `N`. When several runs share the maximum length the earliest one is returned.
///
/// # Examples
///
/// ```
/// use fgseq_lib::sequences::{longest_homopolymer, Run};
///
/// assert_eq!(longest_homopolymer(b"AACCCGT"), Run::new(2, 3));
/// assert_eq!(longest_homopolymer(b"AAAATTTT"), Run::new(0, 4));
/// assert_eq!(longest_homopolymer(b""), Run::new(0, 0));
/// ```
#[must_use]
pub fn longest_homopolymer(seq: &[u8]) -> Run {
    longest_tandem_repeat(seq, 1)
}

/// Finds the longest run of a repeated two-base unit.
///
/// Each candidate start takes the pair of bases at that position as the unit and extends two
/// bases at a time while a complete next pair is present and matches it. A lone trailing base
/// never extends a run. Sequences shorter than two bases yield `(0, 0)`; any longer sequence
/// yields a run of at least two.
///
/// A homogeneous stretch is a repeat of the pair `(X, X)`, so `AAAA` yields `(0, 4)`.
///
/// # Examples
///
/// ```
/// use fgseq_lib::sequences::{longest_dinuc, Run};
///
/// assert_eq!(longest_dinuc(b"ATATATG"), Run::new(0, 6));
/// assert_eq!(longest_dinuc(b"GCACACA"), Run::new(1, 6));
/// assert_eq!(longest_dinuc(b"A"), Run::new(0, 0));
/// ```
#[must_use]
pub fn longest_dinuc(seq: &[u8]) -> Run {
    longest_tandem_repeat(seq, 2)
}

/// Finds the longest run formed by repeating a unit of `unit_len` bases.
///
/// The unit at each candidate start is the `unit_len` bases found there; the run extends one
/// whole unit at a time, so run lengths are multiples of `unit_len`. Ties go to the earliest
/// start. Returns `(0, 0)` if `unit_len` is zero or the sequence is shorter than one unit.
///
/// # Examples
///
/// ```
/// use fgseq_lib::sequences::{longest_tandem_repeat, Run};
///
/// assert_eq!(longest_tandem_repeat(b"TTCAGCAGCAGTT", 3), Run::new(2, 9));
/// assert_eq!(longest_tandem_repeat(b"ACGT", 0), Run::new(0, 0));
/// ```
#[must_use]
pub fn longest_tandem_repeat(seq: &[u8], unit_len: usize) -> Run {
    find_longest_run(seq, unit_len, bases_equal)
}

/// Shared run finder behind the homopolymer, dinucleotide and tandem-repeat scanners.
///
/// After scanning a run `[start, end)`, any start in `start + 1..=end - unit_len` can only
/// produce a shorter run or one of equal length that starts later, so the scan resumes at
/// `end - unit_len + 1`. The result is identical to restarting at every position. This relies
/// on `eq` being an equivalence relation.
fn find_longest_run<F>(seq: &[u8], unit_len: usize, eq: F) -> Run
where
    F: Fn(u8, u8) -> bool,
{
    let mut best = Run::default();
    if unit_len == 0 {
        return best;
    }

    let mut start = 0;
    while start + unit_len <= seq.len() {
        let unit = &seq[start..start + unit_len];
        let mut end = start + unit_len;
        while end + unit_len <= seq.len()
            && unit.iter().zip(&seq[end..end + unit_len]).all(|(&a, &b)| eq(a, b))
        {
            end += unit_len;
        }

        let length = end - start;
        if length > best.length {
            best = Run::new(start, length);
        }
        start = (start + 1).max(end + 1 - unit_len);
    }

    best
}

/// Summary of the repeat structure of a single sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceScan {
    /// Number of bases in the sequence
    pub length: usize,
    /// Longest homopolymer run
    pub homopolymer: Run,
    /// Longest dinucleotide-repeat run
    pub dinuc: Run,
}

/// Runs both repeat scanners over a sequence.
///
/// # Examples
///
/// ```
/// use fgseq_lib::sequences::{scan_sequence, Run};
///
/// let scan = scan_sequence(b"GGGCACACAT");
/// assert_eq!(scan.length, 10);
/// assert_eq!(scan.homopolymer, Run::new(0, 3));
/// assert_eq!(scan.dinuc, Run::new(3, 6));
/// ```
#[must_use]
pub fn scan_sequence(seq: &[u8]) -> SequenceScan {
    SequenceScan {
        length: seq.len(),
        homopolymer: longest_homopolymer(seq),
        dinuc: longest_dinuc(seq),
    }
}
