//! # Data Loader Crate
//!
//! This crate reads a flat-file movie database and turns each line into a
//! structured record.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (ParsedRecord, ReleaseYear)
//! - **parser**: Parse `Title (Year)/Actor/Actor` lines
//! - **source**: Stream lines from a file without loading it whole
//! - **error**: Error types for reading and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{open_lines, parse_record, Encoding};
//! use std::path::Path;
//!
//! for line in open_lines(Path::new("data/movies.txt"), Encoding::Utf8)? {
//!     let record = parse_record(&line?);
//!     println!("{} ({}) with {} actors", record.title, record.year, record.actors.len());
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result, YearFieldError};
pub use parser::parse_record;
pub use source::{open_lines, read_all_lines, Encoding, LineSource};
pub use types::{
    // Type aliases
    ActorName,
    Title,
    Year,
    // Core types
    ParsedRecord,
    ReleaseYear,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year_helpers() {
        assert_eq!(ReleaseYear::Known(1992).known(), Some(1992));
        assert_eq!(ReleaseYear::Unknown.known(), None);
        assert!(ReleaseYear::Unknown.is_unknown());
        assert_eq!(ReleaseYear::from(None), ReleaseYear::Unknown);
        assert_eq!(ReleaseYear::from(Some(-44)), ReleaseYear::Known(-44));
    }

    #[test]
    fn test_unknown_is_not_a_year() {
        // No integer year, negative or otherwise, equals the unknown marker
        for year in [-1, 0, i32::MIN, i32::MAX] {
            assert_ne!(ReleaseYear::Known(year), ReleaseYear::Unknown);
        }
        assert_eq!(ReleaseYear::Unknown.to_string(), "unknown");
        assert_eq!(ReleaseYear::Known(2004).to_string(), "2004");
    }

    #[test]
    fn test_parse_lines_from_memory() {
        let input = "Unforgiven (1992)/Eastwood, Clint\nSome Title/Actor A\n";
        let records: Vec<ParsedRecord> = read_all_lines(input.as_bytes(), Encoding::Utf8)
            .unwrap()
            .iter()
            .map(|line| parse_record(line))
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, ReleaseYear::Known(1992));
        assert_eq!(records[1].year, ReleaseYear::Unknown);
    }
}
