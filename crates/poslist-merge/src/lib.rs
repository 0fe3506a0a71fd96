//! Merge engine for poslist.
//!
//! Combines two collections of positional records into one, ordered by span
//! start. A record whose span lies more than half inside the previously
//! accepted record's span is fused into it; everything else stays distinct.
//!
//! # Key Types
//!
//! - [`merge`] — the default, infallible merge
//! - [`Merger`] / [`MergeConfig`] — configurable merge (span expansion, validation)
//! - [`MergeOutcome`] / [`MergeStats`] — merged records plus bookkeeping
//! - [`fuses`] — the fusion predicate

pub mod config;
pub mod error;
pub mod merger;
pub mod predicate;

pub use config::MergeConfig;
pub use error::{MergeError, MergeResult};
pub use merger::{merge, MergeOutcome, MergeStats, Merger};
pub use predicate::fuses;
