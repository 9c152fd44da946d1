//! Error types for the data-loader crate.
//!
//! Two families live here:
//! - `DataLoadError`: file-level failures. These abort one file only.
//! - `YearFieldError`: per-line anomalies in the year parenthetical. These
//!   never abort anything; the parser substitutes `ReleaseYear::Unknown`
//!   and attaches the anomaly to the parsed record.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a movie database file
///
/// Both variants are a "source read failure": the driver reports them
/// and moves on to the next file.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be opened
    #[error("Failed to open file {}: {source}", path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred while reading a line
    #[error("I/O error at line {line} in {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Anomalies found in the `(...)` span of a title+year segment.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum YearFieldError {
    /// Fewer than four characters between the parentheses, e.g. `(19)`
    #[error("year field too short: ({raw})")]
    Malformed { raw: String },

    /// Four or more characters, but the first four are not decimal digits
    #[error("year field is not numeric: ({raw})")]
    Unparseable { raw: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
