//! Per-actor filmographies.
//!
//! Builds the actor index: actor name -> titles, in file order. A title is
//! pushed once per appearance of the actor in a record, so duplicates in
//! the source survive into the list.

use crate::traits::Aggregator;
use data_loader::{ActorName, ParsedRecord, Title};
use serde::Serialize;
use std::collections::HashMap;

/// Maps each actor to the titles they appear in.
#[derive(Debug, Clone, Default)]
pub struct ActorAggregator {
    index: HashMap<ActorName, Vec<Title>>,
}

/// An actor and the length of their filmography
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorSummary {
    pub name: ActorName,
    pub movie_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorReport {
    pub unique_actor_count: usize,
    pub most_productive: Option<ActorSummary>,
}

impl ActorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles featuring `actor`, in the order they were ingested.
    ///
    /// Returns `None` for an actor that never appeared.
    pub fn movies_for(&self, actor: &str) -> Option<&[Title]> {
        self.index.get(actor).map(|titles| titles.as_slice())
    }

    pub fn unique_actor_count(&self) -> usize {
        self.index.len()
    }

    /// Actor with the most titles. Ties go to the alphabetically first name.
    pub fn most_productive(&self) -> Option<ActorSummary> {
        self.index
            .iter()
            .max_by(|(name_a, titles_a), (name_b, titles_b)| {
                titles_a
                    .len()
                    .cmp(&titles_b.len())
                    .then_with(|| name_b.cmp(name_a))
            })
            .map(|(name, titles)| ActorSummary {
                name: name.clone(),
                movie_count: titles.len(),
            })
    }
}

impl Aggregator for ActorAggregator {
    type Report = ActorReport;

    fn name(&self) -> &str {
        "ActorAggregator"
    }

    fn ingest(&mut self, record: &ParsedRecord) {
        for actor in &record.actors {
            self.index
                .entry(actor.clone())
                .or_default()
                .push(record.title.clone());
        }
    }

    fn merge(&mut self, other: Self) {
        for (actor, titles) in other.index {
            self.index.entry(actor).or_default().extend(titles);
        }
    }

    fn report(&self) -> ActorReport {
        ActorReport {
            unique_actor_count: self.unique_actor_count(),
            most_productive: self.most_productive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::parse_record;

    fn ingest_lines(lines: &[&str]) -> ActorAggregator {
        let mut actors = ActorAggregator::new();
        for line in lines {
            actors.ingest(&parse_record(line));
        }
        actors
    }

    #[test]
    fn test_filmography_in_file_order() {
        let actors = ingest_lines(&[
            "Unforgiven (1992)/Eastwood, Clint/Freeman, Morgan",
            "Million Dollar Baby (2004)/Eastwood, Clint",
        ]);

        assert_eq!(
            actors.movies_for("Eastwood, Clint").unwrap(),
            ["Unforgiven", "Million Dollar Baby"]
        );
        assert_eq!(actors.movies_for("Freeman, Morgan").unwrap(), ["Unforgiven"]);
        assert_eq!(actors.unique_actor_count(), 2);
    }

    #[test]
    fn test_unknown_actor_is_absent() {
        let actors = ingest_lines(&["Unforgiven (1992)/Eastwood, Clint"]);
        assert!(actors.movies_for("Hackman, Gene").is_none());
        // Names are case sensitive
        assert!(actors.movies_for("eastwood, clint").is_none());
    }

    #[test]
    fn test_duplicate_credit_is_kept() {
        let actors = ingest_lines(&["Twins (1988)/Doe, J/Doe, J"]);
        assert_eq!(actors.movies_for("Doe, J").unwrap(), ["Twins", "Twins"]);
        assert_eq!(actors.unique_actor_count(), 1);
    }

    #[test]
    fn test_empty_tokens_are_not_actors() {
        let actors = ingest_lines(&["Gaps (2000)//Smith, A//", "Solo (2001)"]);
        assert_eq!(actors.unique_actor_count(), 1);
        assert!(actors.movies_for("").is_none());
    }

    #[test]
    fn test_most_productive() {
        let actors = ingest_lines(&[
            "A (2000)/Zeta, Z/Alpha, A",
            "B (2001)/Zeta, Z/Alpha, A",
            "C (2002)/Beta, B",
        ]);
        // Zeta and Alpha tie on two movies
        assert_eq!(
            actors.most_productive(),
            Some(ActorSummary { name: "Alpha, A".to_string(), movie_count: 2 })
        );
        assert!(ActorAggregator::new().most_productive().is_none());
    }

    #[test]
    fn test_merge_appends_in_order() {
        let mut left = ingest_lines(&["Unforgiven (1992)/Eastwood, Clint"]);
        let right = ingest_lines(&[
            "Million Dollar Baby (2004)/Eastwood, Clint",
            "Se7en (1995)/Freeman, Morgan",
        ]);

        left.merge(right);
        assert_eq!(
            left.movies_for("Eastwood, Clint").unwrap(),
            ["Unforgiven", "Million Dollar Baby"]
        );
        assert_eq!(left.report().unique_actor_count, 2);
    }
}
