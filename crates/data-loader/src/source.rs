//! Streaming line source for movie database files.
//!
//! Lines are read one at a time from a buffered reader, so a file is never
//! held in memory as a whole. Decoding is chosen up front and applied to
//! every line of the file.

use crate::error::{DataLoadError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Text encoding of a source file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8; invalid sequences become U+FFFD
    #[default]
    Utf8,
    /// ISO-8859-1, each byte maps directly to the same code point
    Latin1,
}

impl Encoding {
    fn decode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}

/// Iterator over the lines of a file
///
/// Yields `Err(DataLoadError::SourceRead)` once on an I/O failure and then
/// stops.
pub struct LineSource<R> {
    reader: R,
    path: PathBuf,
    encoding: Encoding,
    line_no: usize,
    buf: Vec<u8>,
    done: bool,
}

/// Open a file for line-by-line reading
pub fn open_lines(path: &Path, encoding: Encoding) -> Result<LineSource<BufReader<File>>> {
    let file = File::open(path).map_err(|source| DataLoadError::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LineSource::new(BufReader::new(file), path, encoding))
}

impl<R: BufRead> LineSource<R> {
    /// Wrap any buffered reader. `path` is only used in error messages.
    pub fn new(reader: R, path: impl Into<PathBuf>, encoding: Encoding) -> Self {
        Self {
            reader,
            path: path.into(),
            encoding,
            line_no: 0,
            buf: Vec::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.line_no += 1;
                let mut bytes = self.buf.as_slice();
                if let Some(stripped) = bytes.strip_suffix(b"\n") {
                    bytes = stripped;
                }
                if let Some(stripped) = bytes.strip_suffix(b"\r") {
                    bytes = stripped;
                }
                Some(Ok(self.encoding.decode(bytes)))
            }
            Err(source) => {
                self.done = true;
                Some(Err(DataLoadError::SourceRead {
                    path: self.path.clone(),
                    line: self.line_no + 1,
                    source,
                }))
            }
        }
    }
}

/// Read a whole reader through `LineSource`, mostly useful in tests
pub fn read_all_lines<R: Read>(reader: R, encoding: Encoding) -> Result<Vec<String>> {
    LineSource::new(BufReader::new(reader), "<memory>", encoding).collect()
}
