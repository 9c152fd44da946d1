//! Error types for the pipeline crate.

use data_loader::DataLoadError;
use thiserror::Error;

/// Errors raised while aggregating a file or reporting on it
#[derive(Error, Debug)]
pub enum StatsError {
    /// A year report was requested but no record had a known year
    #[error("no movies with a known year were ingested")]
    EmptyDataset,

    /// The line source failed; the file is abandoned
    #[error(transparent)]
    Source(#[from] DataLoadError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StatsError>;
