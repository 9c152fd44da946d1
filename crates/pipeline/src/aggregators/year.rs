//! Release-year histogram and the statistics derived from it.
//!
//! ## Algorithm
//! Ingestion only increments a bucket. Everything else is computed in
//! `report()` from the known-year buckets, walked in ascending year order:
//! 1. First and last year (fails with `EmptyDataset` when there are none)
//! 2. Years in `[first, last]` with no bucket
//! 3. Max, min and mean of the bucket counts
//! 4. Best year: strictly greatest count, so the earliest year wins a tie

use crate::error::{Result, StatsError};
use crate::traits::Aggregator;
use data_loader::{ParsedRecord, ReleaseYear, Year};
use serde::Serialize;
use std::collections::BTreeMap;

/// Movie count per year, plus a separate bucket for unknown years.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearHistogram {
    known: BTreeMap<Year, u64>,
    unknown: u64,
}

impl YearHistogram {
    pub fn increment(&mut self, year: ReleaseYear) {
        self.add(year, 1);
    }

    fn add(&mut self, year: ReleaseYear, count: u64) {
        match year {
            ReleaseYear::Known(year) => *self.known.entry(year).or_insert(0) += count,
            ReleaseYear::Unknown => self.unknown += count,
        }
    }

    pub fn count(&self, year: ReleaseYear) -> u64 {
        match year {
            ReleaseYear::Known(year) => self.known.get(&year).copied().unwrap_or(0),
            ReleaseYear::Unknown => self.unknown,
        }
    }

    pub fn unknown_count(&self) -> u64 {
        self.unknown
    }

    /// Known-year buckets in ascending year order
    pub fn known(&self) -> &BTreeMap<Year, u64> {
        &self.known
    }

    /// Sum of every bucket, unknown included
    pub fn total(&self) -> u64 {
        self.unknown + self.known.values().sum::<u64>()
    }

    pub fn merge(&mut self, other: YearHistogram) {
        for (year, count) in other.known {
            self.add(ReleaseYear::Known(year), count);
        }
        self.unknown += other.unknown;
    }
}

/// Summary of the year histogram
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearReport {
    pub unknown_count: u64,
    pub first_year: Year,
    pub last_year: Year,
    /// Years in `[first_year, last_year]` with no movies, ascending
    pub years_without_movies: Vec<Year>,
    pub max_movies_in_year: u64,
    pub min_movies_in_year: u64,
    /// Mean movies per year, over years that have at least one movie
    pub average_movies_per_year: f64,
    pub best_year: Year,
    pub best_year_count: u64,
}

impl YearReport {
    /// Years without movies as "1991, 1993"
    pub fn years_without_movies_joined(&self) -> String {
        self.years_without_movies
            .iter()
            .map(|year| year.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Counts movies per release year.
#[derive(Debug, Clone, Default)]
pub struct YearAggregator {
    histogram: YearHistogram,
}

impl YearAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn histogram(&self) -> &YearHistogram {
        &self.histogram
    }

    pub fn unknown_count(&self) -> u64 {
        self.histogram.unknown_count()
    }

    /// Earliest and latest known year
    pub fn year_range(&self) -> Result<(Year, Year)> {
        let known = self.histogram.known();
        match (known.keys().next(), known.keys().next_back()) {
            (Some(&first), Some(&last)) => Ok((first, last)),
            _ => Err(StatsError::EmptyDataset),
        }
    }

    /// Years between the first and last known year with no movies
    pub fn years_without_movies(&self) -> Result<Vec<Year>> {
        let (first, last) = self.year_range()?;
        let known = self.histogram.known();
        Ok((first..=last)
            .filter(|year| !known.contains_key(year))
            .collect())
    }

    /// Year with the strictly greatest count and that count.
    ///
    /// Years are visited in ascending order and only a strictly larger
    /// count replaces the current best, so ties go to the earliest year.
    pub fn best_year(&self) -> Result<(Year, u64)> {
        self.histogram
            .known()
            .iter()
            .fold(None, |best: Option<(Year, u64)>, (&year, &count)| match best {
                Some((_, best_count)) if count <= best_count => best,
                _ => Some((year, count)),
            })
            .ok_or(StatsError::EmptyDataset)
    }

    fn build_report(&self) -> Result<YearReport> {
        let (first_year, last_year) = self.year_range()?;
        let (best_year, best_year_count) = self.best_year()?;

        let counts = self.histogram.known().values();
        let buckets = counts.len();
        let sum: u64 = counts.clone().sum();
        let max_movies_in_year = counts.clone().copied().max().unwrap_or(0);
        let min_movies_in_year = counts.copied().min().unwrap_or(0);

        Ok(YearReport {
            unknown_count: self.histogram.unknown_count(),
            first_year,
            last_year,
            years_without_movies: self.years_without_movies()?,
            max_movies_in_year,
            min_movies_in_year,
            average_movies_per_year: sum as f64 / buckets as f64,
            best_year,
            best_year_count,
        })
    }
}

impl Aggregator for YearAggregator {
    type Report = Result<YearReport>;

    fn name(&self) -> &str {
        "YearAggregator"
    }

    fn ingest(&mut self, record: &ParsedRecord) {
        self.histogram.increment(record.year);
    }

    fn merge(&mut self, other: Self) {
        self.histogram.merge(other.histogram);
    }

    /// Fails with `StatsError::EmptyDataset` when no known year was ingested
    fn report(&self) -> Result<YearReport> {
        self.build_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_years(years: &[Option<Year>]) -> YearAggregator {
        let mut aggregator = YearAggregator::new();
        for &year in years {
            aggregator.ingest(&ParsedRecord::new("Movie", year.into(), vec![]));
        }
        aggregator
    }

    #[test]
    fn test_report() {
        let years = with_years(&[
            Some(1990),
            Some(1990),
            Some(1992),
            Some(1995),
            Some(1995),
            Some(1995),
            None,
        ]);
        let report = years.report().unwrap();

        assert_eq!(report.unknown_count, 1);
        assert_eq!(report.first_year, 1990);
        assert_eq!(report.last_year, 1995);
        assert_eq!(report.years_without_movies, vec![1991, 1993, 1994]);
        assert_eq!(report.years_without_movies_joined(), "1991, 1993, 1994");
        assert_eq!(report.max_movies_in_year, 3);
        assert_eq!(report.min_movies_in_year, 1);
        assert!((report.average_movies_per_year - 2.0).abs() < f64::EPSILON);
        assert_eq!((report.best_year, report.best_year_count), (1995, 3));
    }

    #[test]
    fn test_tie_goes_to_earliest_year() {
        let mut years = YearAggregator::new();
        for _ in 0..5 {
            years.ingest(&ParsedRecord::new("A", ReleaseYear::Known(1990), vec![]));
            years.ingest(&ParsedRecord::new("B", ReleaseYear::Known(1991), vec![]));
        }
        assert_eq!(years.best_year().unwrap(), (1990, 5));

        // Ingestion order does not matter, only year order
        let mut reversed = YearAggregator::new();
        for _ in 0..5 {
            reversed.ingest(&ParsedRecord::new("B", ReleaseYear::Known(1991), vec![]));
            reversed.ingest(&ParsedRecord::new("A", ReleaseYear::Known(1990), vec![]));
        }
        assert_eq!(reversed.best_year().unwrap(), (1990, 5));
    }

    #[test]
    fn test_gap_detection() {
        let years = with_years(&[Some(1990), Some(1992)]);
        assert_eq!(years.years_without_movies().unwrap(), vec![1991]);

        let contiguous = with_years(&[Some(1990), Some(1991)]);
        assert!(contiguous.years_without_movies().unwrap().is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        assert!(matches!(
            YearAggregator::new().report(),
            Err(StatsError::EmptyDataset)
        ));

        // Unknown years alone are still an empty dataset
        let unknown_only = with_years(&[None, None]);
        assert!(matches!(unknown_only.report(), Err(StatsError::EmptyDataset)));
        assert_eq!(unknown_only.unknown_count(), 2);
    }

    #[test]
    fn test_histogram_sum_law() {
        let years = with_years(&[Some(2001), None, Some(2001), Some(1999), None]);
        assert_eq!(years.histogram().total(), 5);
        assert_eq!(years.histogram().count(ReleaseYear::Unknown), 2);
        assert_eq!(years.histogram().count(ReleaseYear::Known(2001)), 2);
        assert_eq!(years.histogram().count(ReleaseYear::Known(2000)), 0);
    }

    #[test]
    fn test_negative_years_are_real_years() {
        let years = with_years(&[Some(-1), None]);
        assert_eq!(years.histogram().count(ReleaseYear::Known(-1)), 1);
        assert_eq!(years.unknown_count(), 1);
        assert_eq!(years.report().unwrap().first_year, -1);
    }

    #[test]
    fn test_merge() {
        let mut left = with_years(&[Some(1990), None]);
        let right = with_years(&[Some(1990), Some(1993)]);
        left.merge(right);

        let histogram = left.histogram();
        assert_eq!(histogram.count(ReleaseYear::Known(1990)), 2);
        assert_eq!(histogram.count(ReleaseYear::Known(1993)), 1);
        assert_eq!(histogram.unknown_count(), 1);
        assert_eq!(histogram.total(), 4);
    }
}
