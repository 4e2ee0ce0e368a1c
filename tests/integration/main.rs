//! Integration tests for the fgseq command-line tool.
//!
//! These tests run the compiled binary end to end and check its output.

mod helpers;
mod test_mismatches_command;
mod test_revcomp_command;
mod test_scan_command;
