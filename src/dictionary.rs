//! Dictionary file loader.
//!
//! A dictionary file starts with a line holding the number of entries,
//! followed by one entry per line (in this order):
//! - the weight of the term
//! - a tabulation (\t)
//! - the term itself (which may contain spaces)
//!
//! Whitespace before the weight is tolerated, matching files that
//! right-align the weight column. Exactly the announced number of
//! entries is read; lines past it are ignored, and running out of
//! lines before it is a truncation error.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use thiserror::Error;

/// A dictionary file could not be read or parsed. Parse variants carry
/// the 1-based line number of the offending line.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("dictionary file is empty, expected an entry count on the first line")]
    MissingHeader,

    #[error("invalid entry count {0:?} on the first line")]
    InvalidHeader(String),

    #[error("line {line}: invalid weight {weight:?}")]
    InvalidWeight { line: usize, weight: String },

    #[error("line {line}: no term after the weight")]
    MissingTerm { line: usize },

    #[error("file ends after {read} of {expected} announced entries")]
    Truncated { read: usize, expected: usize },
}

/// One parsed entry of the dictionary file.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryLine {
    pub term: String,
    pub weight: f64,
}

/// Lazy reader over a dictionary file, yielding one
/// [`DictionaryLine`] per announced entry.
pub struct Dictionary {
    lines: Lines<BufReader<File>>,
    /// Entries still to be read, per the header count.
    remaining: usize,
    expected: usize,
    line_no: usize,
}

impl Dictionary {
    /// Open the file and read its entry-count header.
    pub fn open(path: &Path) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let mut lines = BufReader::new(file).lines();

        let header = lines.next().ok_or(DictionaryError::MissingHeader)??;
        let expected = header
            .trim()
            .parse()
            .map_err(|_| DictionaryError::InvalidHeader(header.trim().to_string()))?;

        Ok(Dictionary {
            lines,
            remaining: expected,
            expected,
            line_no: 1,
        })
    }

    /// Read a whole file into the parallel collections the
    /// [`Autocomplete`] facade is built from.
    ///
    /// [`Autocomplete`]: crate::Autocomplete
    pub fn read_all(path: &Path) -> Result<(Vec<String>, Vec<f64>), DictionaryError> {
        let dictionary = Self::open(path)?;
        let mut terms = Vec::with_capacity(dictionary.expected);
        let mut weights = Vec::with_capacity(dictionary.expected);

        for line in dictionary {
            let line = line?;
            terms.push(line.term);
            weights.push(line.weight);
        }

        Ok((terms, weights))
    }

    fn parse_line(&self, line: &str) -> Result<DictionaryLine, DictionaryError> {
        let rest = line.trim_start();
        let (weight, term) =
            rest.split_once(char::is_whitespace)
                .ok_or(DictionaryError::MissingTerm {
                    line: self.line_no,
                })?;

        let weight = weight
            .parse()
            .map_err(|_| DictionaryError::InvalidWeight {
                line: self.line_no,
                weight: weight.to_string(),
            })?;

        let term = term.trim_start();
        if term.is_empty() {
            return Err(DictionaryError::MissingTerm {
                line: self.line_no,
            });
        }

        Ok(DictionaryLine {
            term: term.to_string(),
            weight,
        })
    }
}

impl Iterator for Dictionary {
    type Item = Result<DictionaryLine, DictionaryError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let line = match self.lines.next() {
            Some(Ok(line)) => line,
            Some(Err(error)) => return Some(Err(error.into())),
            None => {
                let read = self.expected - self.remaining;
                // Fuse the iterator so the error is reported once.
                self.remaining = 0;
                return Some(Err(DictionaryError::Truncated {
                    read,
                    expected: self.expected,
                }));
            }
        };

        self.remaining -= 1;
        self.line_no += 1;
        Some(self.parse_line(&line))
    }
}
