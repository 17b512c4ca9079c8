use thiserror::Error;

/// Error raised when the scanner hits a reference it cannot parse to completion.
///
/// An unknown-but-well-formed name is never an error; it is deferred. The only
/// failure mode is syntax: a `$` that does not begin a valid reference, or a
/// reference that is never closed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExpandError {
    #[error("malformed variable reference {fragment:?}: {kind}")]
    MalformedReference {
        /// The offending portion of the input, starting at its `$`.
        fragment: String,
        kind: MalformedKind,
    },
}

impl ExpandError {
    pub(super) fn malformed(fragment: &str, kind: MalformedKind) -> Self {
        ExpandError::MalformedReference {
            fragment: fragment.to_string(),
            kind,
        }
    }
}

/// What exactly was wrong with a malformed reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedKind {
    #[error("expected a character after '$'")]
    DanglingDollar,

    #[error("expected '(' after '$', got {0:?}")]
    MissingOpenParen(char),

    #[error("empty variable name")]
    EmptyName,

    #[error("invalid character {0:?} in variable name")]
    InvalidNameChar(char),

    #[error("missing ')' for '$('")]
    Unterminated,
}
