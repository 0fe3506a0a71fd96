use serde::{Deserialize, Serialize};

/// Configuration for the [`Merger`](crate::Merger).
///
/// The default reproduces the plain merge: no validation, and a fused record
/// keeps the span of the record it was fused into.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// When `true`, a fused record's span grows to the union of both spans,
    /// and later candidates are tested against the grown span.
    pub expand_span_on_fusion: bool,
    /// When `true`, every input span is checked for `left <= right` before
    /// merging and the first offender aborts the merge.
    pub validate_spans: bool,
}
