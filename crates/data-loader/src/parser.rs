//! Parser for movie database lines.
//!
//! Format: `Title (Year)/Actor1/Actor2/.../ActorN`
//!
//! The first `/`-delimited field is the title+year segment. The year is read
//! from the last `(...)` span in that segment; the title is whatever comes
//! before it. Titles may themselves contain parentheses, so only the last
//! pair is considered, and only when the `)` comes after the `(`.
//!
//! `parse_record` is total: every line yields a record. Year spans that
//! cannot be read become `ReleaseYear::Unknown` and are reported through
//! `ParsedRecord::year_anomaly` and a `warn!` event.

use crate::error::YearFieldError;
use crate::types::*;
use tracing::warn;

/// Minimum number of characters inside `(...)` for a year to be read
const YEAR_DIGITS: usize = 4;

/// Parse one raw line into a `ParsedRecord`
///
/// Example: "Unforgiven (1992)/Eastwood, Clint/Freeman, Morgan"
///   -> title "Unforgiven", year 1992, two actors
pub fn parse_record(line: &str) -> ParsedRecord {
    let (segment, rest) = split_segment(line);

    let (year, year_anomaly) = match extract_year(segment) {
        Ok(year) => (year, None),
        Err(anomaly) => {
            warn!(segment = segment.trim(), "{anomaly}");
            (ReleaseYear::Unknown, Some(anomaly))
        }
    };

    ParsedRecord {
        title: extract_title(segment).to_string(),
        year,
        actors: rest.map(extract_actors).unwrap_or_default(),
        year_anomaly,
    }
}

/// Split a line into its title+year segment and the remainder after the
/// first `/` (`None` when the line has no `/`)
fn split_segment(line: &str) -> (&str, Option<&str>) {
    match line.split_once('/') {
        Some((segment, rest)) => (segment, Some(rest)),
        None => (line, None),
    }
}

/// Byte offsets of the last `(` and the last `)` when the `)` comes after
/// the `(`
fn year_span(segment: &str) -> Option<(usize, usize)> {
    let open = segment.rfind('(')?;
    let close = segment.rfind(')')?;
    (close > open).then_some((open, close))
}

/// Extract the display title from a title+year segment
///
/// Example: "Toy Story (1995)" -> "Toy Story"
///          "Movie Title"      -> "Movie Title"
///          "Odd ) Title ("    -> "Odd ) Title ("
pub fn extract_title(segment: &str) -> &str {
    match year_span(segment) {
        Some((open, _)) => segment[..open].trim(),
        None => segment.trim(),
    }
}

/// Extract the release year from a title+year segment
///
/// Example: "Toy Story (1995)"     -> Ok(Known(1995))
///          "Hamlet (1996 TV)"     -> Ok(Known(1996))
///          "Movie Title"          -> Ok(Unknown)
///          "Short (19)"           -> Err(Malformed)
///          "Bad (????)"           -> Err(Unparseable)
pub fn extract_year(segment: &str) -> Result<ReleaseYear, YearFieldError> {
    let Some((open, close)) = year_span(segment) else {
        return Ok(ReleaseYear::Unknown);
    };

    let inner = segment[open + 1..close].trim();
    if inner.chars().count() < YEAR_DIGITS {
        return Err(YearFieldError::Malformed {
            raw: inner.to_string(),
        });
    }

    let digits: String = inner.chars().take(YEAR_DIGITS).collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(YearFieldError::Unparseable {
            raw: inner.to_string(),
        });
    }

    digits
        .parse::<Year>()
        .map(ReleaseYear::Known)
        .map_err(|_| YearFieldError::Unparseable {
            raw: inner.to_string(),
        })
}

/// Split the text after the first `/` into actor names
///
/// Each token is trimmed and empty tokens (from `//` or a trailing `/`) are
/// skipped. Surrounding whitespace is therefore not part of a name:
/// "Eastwood, Clint " and "Eastwood, Clint" are the same actor. Case and
/// punctuation inside the name are kept as-is.
///
/// Example: "Eastwood, Clint//Freeman, Morgan/" -> ["Eastwood, Clint", "Freeman, Morgan"]
pub fn extract_actors(rest: &str) -> Vec<ActorName> {
    rest.split('/')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
