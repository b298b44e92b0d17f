//! Errors raised while loading rule/update text.

use crate::rules::RuleParseError;

/// A malformed line in the rule/update text. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A line in the rule section is not `before|after`.
    #[error("line {line}: {source}")]
    Rule {
        /// Offending line.
        line: usize,
        /// Why the rule was rejected.
        #[source]
        source: RuleParseError,
    },

    /// An update entry is not a non-negative integer.
    #[error("line {line}: invalid node id {token:?}")]
    InvalidNumber {
        /// Offending line.
        line: usize,
        /// The rejected token, trimmed.
        token: String,
    },

    /// An update has an empty entry, e.g. `1,,2` or a trailing comma.
    #[error("line {line}: empty entry at position {index}")]
    EmptyToken {
        /// Offending line.
        line: usize,
        /// Zero-based entry index within the line.
        index: usize,
    },
}

/// Error for [`PrintQueue::from_path`](super::PrintQueue::from_path).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file contents are malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
