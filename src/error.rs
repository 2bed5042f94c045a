use thiserror::Error;

/// Result type for pagetrace operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pagetrace
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed trace line
    #[error("malformed trace line {line} ({content:?}): {kind}")]
    Parse {
        /// 1-based line number in the input
        line: usize,
        /// The offending line, as read
        content: String,
        /// What was wrong with it
        kind: ParseErrorKind,
    },
}

/// Reason a single trace line failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Fewer than two whitespace-separated tokens
    #[error("expected `<hex-address> <op>`, found {found} field(s)")]
    MissingField {
        /// Number of tokens present
        found: usize,
    },
    /// More than two whitespace-separated tokens
    #[error("expected `<hex-address> <op>`, found {found} fields")]
    TrailingField {
        /// Number of tokens present
        found: usize,
    },
    /// Line is not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
    /// Address token is not a 64-bit hexadecimal number
    #[error("invalid hexadecimal address {token:?}")]
    InvalidAddress {
        /// The rejected token
        token: String,
    },
}
