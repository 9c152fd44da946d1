//! Run configuration for the aggregation pipeline.

use data_loader::Encoding;

/// Default number of lines handed to rayon at once in parallel mode
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// How a file is read and aggregated.
///
/// ## Usage
/// ```ignore
/// let config = PipelineConfig::default()
///     .with_parallel(true)
///     .with_batch_size(50_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Aggregate each batch of lines with rayon instead of one by one
    pub parallel: bool,
    /// Lines buffered per batch in parallel mode. Never 0.
    pub batch_size: usize,
    /// Text encoding of the input files
    pub encoding: Encoding,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self {
            parallel: false,
            batch_size: DEFAULT_BATCH_SIZE,
            encoding: Encoding::Utf8,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the batch size. 0 is treated as 1.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
