use crate::expand::ExpandError;
use crate::namespace::NamespaceError;
use thiserror::Error;

/// Top-level error type for the genvars library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("expansion error: {0}")]
    Expand(#[from] ExpandError),

    #[error("namespace error: {0}")]
    Namespace(#[from] NamespaceError),
}
