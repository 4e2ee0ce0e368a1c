//! IUPAC base equality and complementation.
//!
//! Bases are ASCII bytes. Equality ignores case but otherwise compares symbols literally:
//! ambiguity codes are never expanded, so `N` only equals `N` (or `n`).

/// Returns true if two bases are the same symbol, ignoring case.
///
/// IUPAC ambiguity codes are compared symbol-for-symbol, without expansion. Any byte is
/// accepted; non-letters are compared as-is.
///
/// # Examples
///
/// ```
/// use fgseq_dna::dna::bases_equal;
///
/// assert!(bases_equal(b'a', b'A'));
/// assert!(bases_equal(b'N', b'n'));
/// assert!(!bases_equal(b'N', b'A'));
/// assert!(!bases_equal(b'R', b'G'));
/// ```
#[inline]
#[must_use]
pub const fn bases_equal(a: u8, b: u8) -> bool {
    a.to_ascii_uppercase() == b.to_ascii_uppercase()
}

/// Complements a single base, preserving case.
///
/// Watson-Crick pairs are swapped (A<->T, C<->G) and `U` complements to `A`. IUPAC ambiguity
/// codes map to the code for the complementary set: R<->Y, K<->M, B<->V, D<->H, while S, W
/// and N are their own complements. Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use fgseq_dna::dna::complement_base;
///
/// assert_eq!(complement_base(b'A'), b'T');
/// assert_eq!(complement_base(b'g'), b'c');
/// assert_eq!(complement_base(b'R'), b'Y');
/// assert_eq!(complement_base(b'u'), b'a');
/// assert_eq!(complement_base(b'-'), b'-');
/// ```
#[inline]
#[must_use]
pub const fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'a' => b't',
        b't' | b'u' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        b'r' => b'y',
        b'y' => b'r',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        // S, W, N and unrecognized symbols
        _ => base,
    }
}

/// Complements every base of a sequence without reversing it.
///
/// # Examples
///
/// ```
/// use fgseq_dna::dna::complement;
///
/// assert_eq!(complement(b"AACg"), b"TTGc".to_vec());
/// assert_eq!(complement(b""), b"".to_vec());
/// ```
#[must_use]
pub fn complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&base| complement_base(base)).collect()
}

/// Reverse complements a sequence, preserving case.
///
/// # Examples
///
/// ```
/// use fgseq_dna::dna::reverse_complement;
///
/// assert_eq!(reverse_complement(b"ACGT"), b"ACGT".to_vec());
/// assert_eq!(reverse_complement(b"AAAC"), b"GTTT".to_vec());
/// assert_eq!(reverse_complement(b"acgN"), b"Ncgt".to_vec());
/// ```
#[must_use]
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&base| complement_base(base)).collect()
}

/// Complements a sequence in place.
#[inline]
pub fn complement_in_place(seq: &mut [u8]) {
    for base in seq.iter_mut() {
        *base = complement_base(*base);
    }
}

/// Reverse complements a sequence in place.
///
/// # Examples
///
/// ```
/// use fgseq_dna::dna::reverse_complement_in_place;
///
/// let mut seq = b"AACGTT".to_vec();
/// reverse_complement_in_place(&mut seq);
/// assert_eq!(seq, b"AACGTT".to_vec());
/// ```
pub fn reverse_complement_in_place(seq: &mut [u8]) {
    seq.reverse();
    complement_in_place(seq);
}

/// Complements a string without reversing it. Non-ASCII characters are passed through.
#[must_use]
pub fn complement_str(seq: &str) -> String {
    seq.chars().map(complement_char).collect()
}

/// Reverse complements a string, preserving case.
///
/// # Examples
///
/// ```
/// use fgseq_dna::dna::reverse_complement_str;
///
/// assert_eq!(reverse_complement_str("ACGT"), "ACGT");
/// assert_eq!(reverse_complement_str("AcGgt"), "acCgT");
/// ```
#[must_use]
pub fn reverse_complement_str(seq: &str) -> String {
    seq.chars().rev().map(complement_char).collect()
}

#[inline]
fn complement_char(c: char) -> char {
    if c.is_ascii() { char::from(complement_base(c as u8)) } else { c }
}
