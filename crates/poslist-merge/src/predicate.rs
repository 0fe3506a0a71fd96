//! The fusion predicate.
//!
//! Overlap is measured as a fraction of the *candidate's* length only, so the
//! predicate is asymmetric: `fuses(a, b)` and `fuses(b, a)` can disagree for
//! the same pair of spans.

use poslist_types::Span;

/// Returns `true` when strictly more than half of `candidate` lies inside
/// `current`.
///
/// A zero-length candidate needs a positive overlap, which it can never
/// have, so it never fuses, not even when it sits inside `current`.
pub fn fuses(current: &Span, candidate: &Span) -> bool {
    current.overlap(candidate) > candidate.len() / 2.0
}
