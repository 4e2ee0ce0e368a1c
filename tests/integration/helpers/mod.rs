//! Helper utilities for integration tests.

use std::process::{Command, Output};

/// Runs the fgseq binary with the given arguments, with logging silenced.
pub fn run_fgseq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fgseq"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to run fgseq")
}

/// Returns the standard output of a successful run as lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "fgseq failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone())
        .expect("stdout was not UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}
