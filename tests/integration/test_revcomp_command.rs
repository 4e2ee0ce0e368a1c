//! Integration tests for the revcomp command.

use crate::helpers::{run_fgseq, stdout_lines};

#[test]
fn test_revcomp() {
    let output = run_fgseq(&["revcomp", "ACGT", "AAACN", "acgRY"]);
    assert_eq!(stdout_lines(&output), vec!["ACGT", "NGTTT", "RYcgt"]);
}

#[test]
fn test_complement_only() {
    let output = run_fgseq(&["revcomp", "--complement-only", "AAACN", "GATTACA"]);
    assert_eq!(stdout_lines(&output), vec!["TTTGN", "CTAATGT"]);
}

#[test]
fn test_revcomp_round_trip() {
    let first = stdout_lines(&run_fgseq(&["revcomp", "GATTACAgattaca"]));
    let second = stdout_lines(&run_fgseq(&["revcomp", &first[0]]));
    assert_eq!(second, vec!["GATTACAgattaca"]);
}
