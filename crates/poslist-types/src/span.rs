use std::fmt;

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{TypeError, TypeResult};

/// A half-open interval `[left, right)` on the real line.
///
/// The well-formedness invariant is `left <= right`, but [`Span::new`] does
/// not enforce it: the merge sweep accepts whatever the caller hands it and
/// must not crash on degenerate input. Use [`Span::try_new`] or
/// [`Span::validate`] at an input boundary that wants to reject bad spans.
///
/// On the wire a span is a two-element array `[left, right]`. Whole-valued
/// endpoints are written as integers, so `[0, 5]` reads back as `[0, 5]`.
#[derive(Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "(f64, f64)")]
pub struct Span {
    /// Inclusive start.
    pub left: f64,
    /// Exclusive end.
    pub right: f64,
}

impl Span {
    /// Create a span without checking `left <= right`.
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Create a span, rejecting inverted or NaN endpoints.
    pub fn try_new(left: f64, right: f64) -> TypeResult<Self> {
        let span = Self::new(left, right);
        span.validate()?;
        Ok(span)
    }

    /// Check the `left <= right` invariant.
    pub fn validate(&self) -> TypeResult<()> {
        if self.left.is_nan() || self.right.is_nan() {
            return Err(TypeError::NotANumber);
        }
        if self.left > self.right {
            return Err(TypeError::InvertedSpan {
                left: self.left,
                right: self.right,
            });
        }
        Ok(())
    }

    /// Length of the span. Negative for an inverted span.
    pub fn len(&self) -> f64 {
        self.right - self.left
    }

    /// Returns `true` for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.len() == 0.0
    }

    /// Length of the geometric intersection with `other`, clamped to zero
    /// when the spans are disjoint or only touch at an endpoint.
    pub fn overlap(&self, other: &Self) -> f64 {
        let inner = self.right.min(other.right) - self.left.max(other.left);
        inner.max(0.0)
    }

    /// Smallest span covering both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            left: self.left.min(other.left),
            right: self.right.max(other.right),
        }
    }
}

impl From<(f64, f64)> for Span {
    fn from((left, right): (f64, f64)) -> Self {
        Self::new(left, right)
    }
}

impl From<Span> for (f64, f64) {
    fn from(span: Span) -> Self {
        (span.left, span.right)
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&Endpoint(self.left))?;
        tuple.serialize_element(&Endpoint(self.right))?;
        tuple.end()
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

struct Endpoint(f64);

impl Serialize for Endpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // NaN and infinities have a NaN fract and fall through to f64.
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INT {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Span({}, {})", self.left, self.right)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.left, self.right)
    }
}
