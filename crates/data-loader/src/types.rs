//! Core domain types for the movie database.
//!
//! A source file has one movie per line:
//!
//! ```text
//! Title (Year)/Last, First/Last, First/...
//! ```
//!
//! Each line is parsed into a short-lived `ParsedRecord` that the
//! aggregators consume and then drop.

use crate::error::YearFieldError;
use serde::Serialize;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Movie title with the year parenthetical stripped, e.g. "Unforgiven"
pub type Title = String;

/// Actor name as it appears in the source, "Last, First" by convention.
/// Case and punctuation sensitive.
pub type ActorName = String;

/// Calendar year. Signed so the model can hold any integer year.
pub type Year = i32;

// =============================================================================
// Release Year
// =============================================================================

/// Release year of a movie, or `Unknown` when none could be extracted.
///
/// `Unknown` is its own variant rather than a reserved integer, so it can
/// never collide with a real year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseYear {
    Known(Year),
    Unknown,
}

impl ReleaseYear {
    /// The year as an `Option`, `None` for `Unknown`
    pub fn known(self) -> Option<Year> {
        match self {
            ReleaseYear::Known(year) => Some(year),
            ReleaseYear::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, ReleaseYear::Unknown)
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseYear::Known(year) => write!(f, "{year}"),
            ReleaseYear::Unknown => f.write_str("unknown"),
        }
    }
}

impl From<Option<Year>> for ReleaseYear {
    fn from(year: Option<Year>) -> Self {
        year.map_or(ReleaseYear::Unknown, ReleaseYear::Known)
    }
}

// =============================================================================
// Parsed Record
// =============================================================================

/// One movie line, parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecord {
    pub title: Title,
    pub year: ReleaseYear,
    /// Actors in source order. Empty tokens are already removed.
    pub actors: Vec<ActorName>,
    /// Set when a `(...)` span was present but could not be read as a year.
    /// `year` is `Unknown` whenever this is `Some`.
    pub year_anomaly: Option<YearFieldError>,
}

impl ParsedRecord {
    /// Build a record with no year anomaly
    pub fn new(title: impl Into<Title>, year: ReleaseYear, actors: Vec<ActorName>) -> Self {
        Self {
            title: title.into(),
            year,
            actors,
            year_anomaly: None,
        }
    }
}
