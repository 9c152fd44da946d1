//! Counts records and distinct titles.

use crate::traits::Aggregator;
use data_loader::{ParsedRecord, Title};
use serde::Serialize;
use std::collections::HashSet;

/// Total record count plus the set of distinct, year-stripped titles.
///
/// Remakes share a title, so `unique_title_count <= total_count` always.
#[derive(Debug, Clone, Default)]
pub struct TitleAggregator {
    total: u64,
    titles: HashSet<Title>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleReport {
    pub total_count: u64,
    pub unique_title_count: u64,
}

impl TitleAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for TitleAggregator {
    type Report = TitleReport;

    fn name(&self) -> &str {
        "TitleAggregator"
    }

    fn ingest(&mut self, record: &ParsedRecord) {
        self.total += 1;
        if !self.titles.contains(&record.title) {
            self.titles.insert(record.title.clone());
        }
    }

    fn merge(&mut self, other: Self) {
        self.total += other.total;
        self.titles.extend(other.titles);
    }

    fn report(&self) -> TitleReport {
        TitleReport {
            total_count: self.total,
            unique_title_count: self.titles.len() as u64,
        }
    }
}
