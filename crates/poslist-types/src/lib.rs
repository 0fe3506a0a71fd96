//! Foundation types for poslist.
//!
//! A positional record pairs a half-open numeric [`Span`] with an ordered
//! sequence of opaque values. Every other poslist crate depends on
//! `poslist-types`.
//!
//! # Key Types
//!
//! - [`Span`] — `(left, right)` interval on the real line
//! - [`PositionalRecord`] — a span plus its payload values
//! - [`TypeError`] — span validation failures

pub mod error;
pub mod record;
pub mod span;

pub use error::{TypeError, TypeResult};
pub use record::PositionalRecord;
pub use span::Span;
