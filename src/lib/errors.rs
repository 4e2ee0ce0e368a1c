//! Custom error types for fgseq operations.

use thiserror::Error;

/// Result type alias for fgseq operations
pub type Result<T> = std::result::Result<T, SeqError>;

/// Error type for fgseq operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// An argument violated an operation's precondition
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Explanation naming the offending input(s)
        reason: String,
    },
}

impl SeqError {
    /// Builds the error raised when two sequences that must be the same length are not.
    pub(crate) fn length_mismatch(s1: &[u8], s2: &[u8]) -> Self {
        SeqError::InvalidArgument {
            reason: format!(
                "sequences of different length: '{}' (length {}) and '{}' (length {})",
                String::from_utf8_lossy(s1),
                s1.len(),
                String::from_utf8_lossy(s2),
                s2.len()
            ),
        }
    }
}
