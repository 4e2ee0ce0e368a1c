//! Integration tests for the scan command.

use std::fs;

use tempfile::TempDir;

use crate::helpers::{run_fgseq, stdout_lines};

const HEADER: &str =
    "sequence\tlength\thomopolymer_offset\thomopolymer_length\tdinuc_offset\tdinuc_length";

#[test]
fn test_scan_to_stdout() {
    let output = run_fgseq(&["scan", "AACCCGT", "ATATATG", "AAAA", "A"]);
    let lines = stdout_lines(&output);

    assert_eq!(
        lines,
        vec![
            HEADER.to_string(),
            "AACCCGT\t7\t2\t3\t0\t2".to_string(),
            "ATATATG\t7\t0\t1\t0\t6".to_string(),
            // Homogeneous run reported as a dinucleotide repeat of (A, A)
            "AAAA\t4\t0\t4\t0\t4".to_string(),
            "A\t1\t0\t1\t0\t0".to_string(),
        ]
    );
}

#[test]
fn test_scan_to_file_with_filter() {
    let temp_dir = TempDir::new().unwrap();
    let output_tsv = temp_dir.path().join("runs.tsv");

    let output = run_fgseq(&[
        "scan",
        "--output",
        output_tsv.to_str().unwrap(),
        "--min-homopolymer",
        "4",
        "ACGTACGT",
        "ttttTTGCA",
        "GGGCACACAT",
    ]);
    assert!(output.status.success(), "Scan command failed");
    assert!(output.stdout.is_empty(), "Nothing should be written to stdout");

    let contents = fs::read_to_string(&output_tsv).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec![HEADER, "ttttTTGCA\t9\t0\t6\t0\t6"]);
}

#[test]
fn test_scan_requires_sequences() {
    let output = run_fgseq(&["scan"]);
    assert!(!output.status.success());
}
