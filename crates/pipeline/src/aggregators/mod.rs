//! Aggregator implementations for the pipeline.
//!
//! Each aggregator is an independent reducer over the same record stream;
//! the AggregationPipeline fans every record out to all of them.

pub mod actor;
pub mod diagnostics;
pub mod title;
pub mod year;

// Re-export for convenience
pub use actor::{ActorAggregator, ActorReport, ActorSummary};
pub use diagnostics::{AnomalySample, DiagnosticsAggregator, DiagnosticsReport};
pub use title::{TitleAggregator, TitleReport};
pub use year::{YearAggregator, YearHistogram, YearReport};
