//! Core traits for the aggregation pipeline.
//!
//! This module defines the Aggregator trait shared by the title, actor,
//! year and diagnostics accumulators.

use data_loader::ParsedRecord;

/// A streaming reducer over parsed records.
///
/// ## Design Note
/// - Each aggregator owns its accumulator; there is no shared state
/// - `merge` must be associative so partial aggregates from shards can be
///   combined in any grouping with the same result. Merging `a` then `b`
///   in file order reproduces the sequential result exactly.
/// - `Default` is the empty aggregate and the identity for `merge`
pub trait Aggregator: Default + Send {
    /// Summary produced once the stream is exhausted
    type Report;

    /// Returns the name of this aggregator (for logging/debugging)
    fn name(&self) -> &str;

    /// Fold one record into the accumulator
    fn ingest(&mut self, record: &ParsedRecord);

    /// Absorb a partial aggregate built from records that come after the
    /// ones already ingested
    fn merge(&mut self, other: Self);

    /// Read the final state
    fn report(&self) -> Self::Report;
}
