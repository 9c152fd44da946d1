//! Aggregation pipeline for movie database statistics.
//!
//! This crate provides:
//! - Aggregator trait and the title, actor, year and diagnostics reducers
//! - AggregationPipeline for fanning each record out to every reducer
//! - ReportBuilder for the console and JSON summaries
//!
//! ## Architecture
//! Each file is processed in a single pass:
//! 1. A line is parsed into a `ParsedRecord` (data-loader)
//! 2. The record is handed to every aggregator; none depends on another
//! 3. At end of input, ReportBuilder reads the final state
//!
//! In parallel mode, batches of lines are folded into partial pipelines
//! with rayon and merged back in order.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{aggregate_file, PipelineConfig, ReportBuilder};
//!
//! let config = PipelineConfig::default().with_parallel(true);
//! let pipeline = aggregate_file(Path::new("data/movies.txt"), &config)?;
//!
//! print!("{}", ReportBuilder::new("Eastwood, Clint").render(&pipeline));
//! ```

pub mod aggregation_pipeline;
pub mod aggregators;
pub mod config;
pub mod error;
pub mod report;
pub mod traits;

// Re-export main types
pub use aggregation_pipeline::{aggregate_file, AggregationPipeline};
pub use aggregators::{
    ActorAggregator, ActorReport, ActorSummary, DiagnosticsAggregator, DiagnosticsReport,
    TitleAggregator, TitleReport, YearAggregator, YearHistogram, YearReport,
};
pub use config::PipelineConfig;
pub use error::{Result, StatsError};
pub use report::{render_text, FileReport, ReportBuilder, DEFAULT_FEATURED_ACTOR};
pub use traits::Aggregator;
