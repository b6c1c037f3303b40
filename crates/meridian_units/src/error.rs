//! Error types for angle formatting.

use thiserror::Error;

/// Errors from rendering a DMS template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// A `{` at the given byte offset has no closing `}`.
    #[error("unterminated placeholder starting at byte {0}")]
    Unterminated(usize),
    /// A lone `}` at the given byte offset.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedBrace(usize),
    /// The placeholder name is not one of sign/degrees/minutes/seconds.
    #[error("unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
    /// The precision in `{seconds:.N}` is not a small integer.
    #[error("invalid precision specifier '{0}'")]
    InvalidPrecision(String),
}
