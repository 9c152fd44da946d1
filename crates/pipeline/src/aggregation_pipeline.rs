//! The AggregationPipeline fans parsed records out to every aggregator.
//!
//! This module provides the main driver loop: lines in, one parse per line,
//! one `ingest` call per aggregator per record.

use crate::aggregators::{ActorAggregator, DiagnosticsAggregator, TitleAggregator, YearAggregator};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::traits::Aggregator;
use data_loader::{open_lines, parse_record, ParsedRecord};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, instrument, trace};

/// Holds the accumulators for one file.
///
/// ## Usage
/// ```ignore
/// let mut pipeline = AggregationPipeline::new();
/// pipeline.ingest_lines(lines);
///
/// let titles = pipeline.titles().report();
/// let years = pipeline.years().report()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct AggregationPipeline {
    titles: TitleAggregator,
    actors: ActorAggregator,
    years: YearAggregator,
    diagnostics: DiagnosticsAggregator,
    skipped_blank_lines: u64,
}

impl AggregationPipeline {
    /// Create a new pipeline with empty accumulators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fan one record out to every aggregator.
    pub fn ingest_record(&mut self, record: &ParsedRecord) {
        self.titles.ingest(record);
        self.actors.ingest(record);
        self.years.ingest(record);
        self.diagnostics.ingest(record);
    }

    /// Parse and ingest one raw line. Blank lines are skipped and are not
    /// records.
    pub fn ingest_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.skipped_blank_lines += 1;
            return;
        }
        self.ingest_record(&parse_record(line));
    }

    /// Ingest lines one at a time, in order.
    pub fn ingest_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.ingest_line(line.as_ref());
        }
    }

    /// Ingest a batch of lines with rayon.
    ///
    /// ## Algorithm
    /// 1. rayon splits the batch into contiguous runs
    /// 2. Each run is folded into its own partial pipeline
    /// 3. Partials are reduced pairwise, left before right
    /// 4. The result is merged into `self`
    ///
    /// Because the reduction keeps left-to-right order, every actor's
    /// filmography ends up in file order, identical to `ingest_lines`.
    pub fn ingest_parallel(&mut self, lines: &[String]) {
        let partial = lines
            .par_iter()
            .fold(AggregationPipeline::new, |mut acc, line| {
                acc.ingest_line(line);
                acc
            })
            .reduce(AggregationPipeline::new, |mut left, right| {
                left.merge(right);
                left
            });
        self.merge(partial);
    }

    /// Drain a line source into the pipeline.
    ///
    /// Stops at the first read error and returns it; whatever was ingested
    /// before the error stays in the accumulators.
    pub fn ingest_source<I>(&mut self, source: I, config: &PipelineConfig) -> Result<()>
    where
        I: IntoIterator<Item = data_loader::Result<String>>,
    {
        if !config.parallel {
            for line in source {
                self.ingest_line(&line?);
            }
            return Ok(());
        }

        let mut batch = Vec::with_capacity(config.batch_size);
        for line in source {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    // Keep the lines read before the failure, as the
                    // sequential path does
                    self.ingest_parallel(&batch);
                    return Err(err.into());
                }
            };
            batch.push(line);
            if batch.len() >= config.batch_size {
                debug!("Aggregating batch of {} lines", batch.len());
                self.ingest_parallel(&batch);
                batch.clear();
            }
        }
        if !batch.is_empty() {
            debug!("Aggregating final batch of {} lines", batch.len());
            self.ingest_parallel(&batch);
        }
        Ok(())
    }

    /// Combine with a pipeline built from later lines of the same input.
    pub fn merge(&mut self, other: AggregationPipeline) {
        merge_stage(&mut self.titles, other.titles);
        merge_stage(&mut self.actors, other.actors);
        merge_stage(&mut self.years, other.years);
        merge_stage(&mut self.diagnostics, other.diagnostics);
        self.skipped_blank_lines += other.skipped_blank_lines;
    }

    pub fn titles(&self) -> &TitleAggregator {
        &self.titles
    }

    pub fn actors(&self) -> &ActorAggregator {
        &self.actors
    }

    pub fn years(&self) -> &YearAggregator {
        &self.years
    }

    pub fn diagnostics(&self) -> &DiagnosticsAggregator {
        &self.diagnostics
    }

    pub fn skipped_blank_lines(&self) -> u64 {
        self.skipped_blank_lines
    }
}

fn merge_stage<A: Aggregator>(stage: &mut A, other: A) {
    trace!("Merging partial {}", stage.name());
    stage.merge(other);
}

/// Read and aggregate a whole file.
///
/// Any failure to open or read the file is returned; the caller decides
/// whether to move on to the next file.
#[instrument(skip(path, config), fields(path = %path.display(), parallel = config.parallel))]
pub fn aggregate_file(path: &Path, config: &PipelineConfig) -> Result<AggregationPipeline> {
    let source = open_lines(path, config.encoding)?;

    let mut pipeline = AggregationPipeline::new();
    pipeline.ingest_source(source, config)?;

    let titles = pipeline.titles().report();
    info!(
        "Aggregated {} records ({} unique titles, {} actors)",
        titles.total_count,
        titles.unique_title_count,
        pipeline.actors().unique_actor_count()
    );
    Ok(pipeline)
}
