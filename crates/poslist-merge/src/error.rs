//! Error types for the merge crate.

use poslist_types::{Span, TypeError};

/// Errors that can occur during a validating merge.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// An input record failed span validation. `index` is the record's
    /// position in the concatenation of both inputs.
    #[error("invalid record at index {index}: span {span}: {source}")]
    InvalidRecord {
        index: usize,
        span: Span,
        #[source]
        source: TypeError,
    },
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
