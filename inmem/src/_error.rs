// this module is transparently re-exported by its parent `lib`

use rdfquad_api::term::TermError;
use thiserror::Error;

/// The error type returned by caller-supplied filter predicates.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// This error is raised by [`Dataset`](crate::Dataset) operations.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// No quad matched a filter that required exactly one match.
    #[error("no quad matches the filter")]
    NotFound,
    /// Several quads matched a filter that required exactly one match.
    #[error("more than one quad matches the filter")]
    AmbiguousMatch,
    /// A quad could not be inserted, because it is not valid.
    #[error(transparent)]
    Term(#[from] TermError),
    /// A filter predicate failed; its error is kept untouched.
    #[error("filter predicate failed: {0}")]
    Callback(#[source] CallbackError),
}

/// Type alias for the result of [`Dataset`](crate::Dataset) operations.
pub type DResult<T> = Result<T, DatasetError>;
