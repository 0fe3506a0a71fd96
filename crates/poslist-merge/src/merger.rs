//! Sort-and-sweep merge of two positional record collections.
//!
//! Both inputs are concatenated, stably sorted by span start, and swept once.
//! Each record is either fused into the last accepted output record or
//! becomes the new last accepted record. O(n log n) for the sort, linear for
//! the sweep.

use poslist_types::PositionalRecord;
use tracing::{debug, warn};

use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::predicate::fuses;

/// Counters describing one merge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Records across both inputs.
    pub input_records: usize,
    /// Records in the merged output.
    pub output_records: usize,
    /// Records fused into an earlier one. Always `input_records - output_records`.
    pub fusions: usize,
}

/// The merged records together with their [`MergeStats`].
#[derive(Clone, Debug, PartialEq)]
pub struct MergeOutcome<T> {
    pub records: Vec<PositionalRecord<T>>,
    pub stats: MergeStats,
}

/// Configurable merge engine.
#[derive(Clone, Debug, Default)]
pub struct Merger {
    config: MergeConfig,
}

impl Merger {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Merge `a` and `b`, returning only the records.
    pub fn merge<T>(
        &self,
        a: Vec<PositionalRecord<T>>,
        b: Vec<PositionalRecord<T>>,
    ) -> MergeResult<Vec<PositionalRecord<T>>> {
        Ok(self.merge_with_stats(a, b)?.records)
    }

    /// Merge `a` and `b`.
    ///
    /// Fails only when `validate_spans` is set and some record has
    /// `left > right` or a NaN endpoint. Indexes in the error count `a`
    /// first, then `b`.
    pub fn merge_with_stats<T>(
        &self,
        a: Vec<PositionalRecord<T>>,
        b: Vec<PositionalRecord<T>>,
    ) -> MergeResult<MergeOutcome<T>> {
        let mut combined = a;
        combined.extend(b);

        if self.config.validate_spans {
            for (index, record) in combined.iter().enumerate() {
                if let Err(source) = record.span.validate() {
                    warn!(index, span = %record.span, error = %source, "rejecting invalid record");
                    return Err(MergeError::InvalidRecord {
                        index,
                        span: record.span,
                        source,
                    });
                }
            }
        }

        Ok(sweep(combined, self.config.expand_span_on_fusion))
    }
}

/// Merge `a` and `b` with the default configuration.
///
/// A fused record keeps the span of the record it was fused into; the
/// candidate's span is discarded even when it extends further right.
pub fn merge<T>(
    a: Vec<PositionalRecord<T>>,
    b: Vec<PositionalRecord<T>>,
) -> Vec<PositionalRecord<T>> {
    let mut combined = a;
    combined.extend(b);
    sweep(combined, false).records
}

fn sweep<T>(mut combined: Vec<PositionalRecord<T>>, expand: bool) -> MergeOutcome<T> {
    let input_records = combined.len();

    // Stable, so equal starts keep concatenation order. Adding 0.0 folds -0.0
    // into 0.0 so they tie; total_cmp keeps NaN from panicking.
    combined.sort_by(|x, y| (x.span.left + 0.0).total_cmp(&(y.span.left + 0.0)));

    let mut records: Vec<PositionalRecord<T>> = Vec::with_capacity(input_records);
    for candidate in combined {
        let target = records
            .last_mut()
            .filter(|current| fuses(&current.span, &candidate.span));
        if let Some(current) = target {
            debug!(
                current = %current.span,
                candidate = %candidate.span,
                overlap = current.span.overlap(&candidate.span),
                "fusing record"
            );
            if expand {
                current.span = current.span.union(&candidate.span);
            }
            current.absorb(candidate);
            continue;
        }
        records.push(candidate);
    }

    let stats = MergeStats {
        input_records,
        output_records: records.len(),
        fusions: input_records - records.len(),
    };
    debug!(
        input = stats.input_records,
        output = stats.output_records,
        fusions = stats.fusions,
        "merge complete"
    );

    MergeOutcome { records, stats }
}
