//! Tally of recoverable year-field anomalies.

use crate::traits::Aggregator;
use data_loader::{ParsedRecord, Title, YearFieldError};
use serde::Serialize;

/// Number of anomalous records kept as examples
pub const MAX_SAMPLES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnomalySample {
    pub title: Title,
    pub anomaly: YearFieldError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    pub malformed_years: u64,
    pub unparseable_years: u64,
    /// The first anomalies seen, in file order
    pub samples: Vec<AnomalySample>,
}

impl DiagnosticsReport {
    pub fn total(&self) -> u64 {
        self.malformed_years + self.unparseable_years
    }
}

#[derive(Debug, Clone, Default)]
pub struct DiagnosticsAggregator {
    report: DiagnosticsReport,
}

impl DiagnosticsAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Aggregator for DiagnosticsAggregator {
    type Report = DiagnosticsReport;

    fn name(&self) -> &str {
        "DiagnosticsAggregator"
    }

    fn ingest(&mut self, record: &ParsedRecord) {
        let Some(anomaly) = &record.year_anomaly else {
            return;
        };
        match anomaly {
            YearFieldError::Malformed { .. } => self.report.malformed_years += 1,
            YearFieldError::Unparseable { .. } => self.report.unparseable_years += 1,
        }
        if self.report.samples.len() < MAX_SAMPLES {
            self.report.samples.push(AnomalySample {
                title: record.title.clone(),
                anomaly: anomaly.clone(),
            });
        }
    }

    fn merge(&mut self, other: Self) {
        self.report.malformed_years += other.report.malformed_years;
        self.report.unparseable_years += other.report.unparseable_years;
        let room = MAX_SAMPLES.saturating_sub(self.report.samples.len());
        self.report
            .samples
            .extend(other.report.samples.into_iter().take(room));
    }

    fn report(&self) -> DiagnosticsReport {
        self.report.clone()
    }
}
