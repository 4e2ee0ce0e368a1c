//! Integration tests for the mismatches command.

use crate::helpers::{run_fgseq, stdout_lines};

#[test]
fn test_mismatches_counts_case_insensitively() {
    let output = run_fgseq(&["mismatches", "ACGT", "acgA"]);
    assert_eq!(stdout_lines(&output), vec!["1"]);
}

#[test]
fn test_mismatches_with_max() {
    let output = run_fgseq(&["mismatches", "--max", "1", "ACGTACGT", "ACGTTCGA"]);
    assert_eq!(stdout_lines(&output), vec!["false"]);

    let output = run_fgseq(&["mismatches", "--max", "2", "ACGTACGT", "ACGTTCGA"]);
    assert_eq!(stdout_lines(&output), vec!["true"]);
}

#[test]
fn test_mismatches_length_mismatch_fails() {
    let output = run_fgseq(&["mismatches", "ACGT", "ACG"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid argument"), "stderr was: {stderr}");
    assert!(stderr.contains("'ACGT' (length 4)"));
    assert!(stderr.contains("'ACG' (length 3)"));
}
