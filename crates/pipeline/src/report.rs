//! Human-readable and JSON summaries of a finished pipeline.
//!
//! `ReportBuilder::build` reads the final aggregator state into a
//! `FileReport`; `render_text` turns that into the console report.

use crate::aggregation_pipeline::AggregationPipeline;
use crate::aggregators::{ActorReport, DiagnosticsReport, TitleReport, YearReport};
use crate::traits::Aggregator;
use data_loader::{ActorName, Title};
use serde::Serialize;
use std::fmt;

/// Actor whose filmography is reported when none is chosen
pub const DEFAULT_FEATURED_ACTOR: &str = "Eastwood, Clint";

/// Filmography of the featured actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedActor {
    pub name: ActorName,
    pub movies: Vec<Title>,
}

/// Everything reported for one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub actors: ActorReport,
    pub featured: FeaturedActor,
    pub titles: TitleReport,
    pub unknown_year_count: u64,
    /// `None` when no record had a known year
    pub years: Option<YearReport>,
    pub diagnostics: DiagnosticsReport,
}

/// Builds reports from a finished pipeline.
pub struct ReportBuilder {
    featured_actor: ActorName,
}

impl ReportBuilder {
    /// Create a builder featuring `actor` in the filmography section.
    pub fn new(actor: impl Into<ActorName>) -> Self {
        Self {
            featured_actor: actor.into(),
        }
    }

    pub fn build(&self, pipeline: &AggregationPipeline) -> FileReport {
        FileReport {
            actors: pipeline.actors().report(),
            featured: FeaturedActor {
                name: self.featured_actor.clone(),
                movies: pipeline
                    .actors()
                    .movies_for(&self.featured_actor)
                    .map(<[Title]>::to_vec)
                    .unwrap_or_default(),
            },
            titles: pipeline.titles().report(),
            unknown_year_count: pipeline.years().unknown_count(),
            // EmptyDataset is the only way a year report fails
            years: pipeline.years().report().ok(),
            diagnostics: pipeline.diagnostics().report(),
        }
    }

    pub fn render(&self, pipeline: &AggregationPipeline) -> String {
        render_text(&self.build(pipeline))
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_FEATURED_ACTOR)
    }
}

/// Render a report as the multi-line console summary.
pub fn render_text(report: &FileReport) -> String {
    report.to_string()
}

impl fmt::Display for FileReport {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(out, self)
    }
}

fn write_report(out: &mut fmt::Formatter<'_>, report: &FileReport) -> fmt::Result {
    writeln!(
        out,
        "There are {} unique actors in the database",
        report.actors.unique_actor_count
    )?;
    if let Some(top) = &report.actors.most_productive {
        writeln!(
            out,
            "Most productive actor: {} with {} movies",
            top.name, top.movie_count
        )?;
    }

    let featured = &report.featured;
    writeln!(
        out,
        "There are {} movies featuring {}",
        featured.movies.len(),
        featured.name
    )?;
    let quoted = featured
        .movies
        .iter()
        .map(|title| format!("\"{title}\""))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Movies featuring {}: {}", featured.name, quoted)?;

    writeln!(
        out,
        "There are {} movies in the database, with {} unique titles",
        report.titles.total_count, report.titles.unique_title_count
    )?;

    writeln!(out, "Movies without a year: {}", report.unknown_year_count)?;
    match &report.years {
        Some(years) => {
            writeln!(out, "First year in movie database: {}", years.first_year)?;
            writeln!(out, "Last year in movie database: {}", years.last_year)?;
            writeln!(
                out,
                "Years without movies: {}",
                years.years_without_movies_joined()
            )?;
            writeln!(out, "Most movies in a year: {}", years.max_movies_in_year)?;
            writeln!(out, "Least movies in a year: {}", years.min_movies_in_year)?;
            writeln!(
                out,
                "Average movies in a year: {:.2}",
                years.average_movies_per_year
            )?;
            writeln!(
                out,
                "Best year was {} with {} movies",
                years.best_year, years.best_year_count
            )?;
        }
        None => writeln!(out, "No movies with a known year in the database")?,
    }

    let diagnostics = &report.diagnostics;
    if diagnostics.total() > 0 {
        writeln!(
            out,
            "Year field anomalies: {} malformed, {} unparseable",
            diagnostics.malformed_years, diagnostics.unparseable_years
        )?;
    }
    Ok(())
}
