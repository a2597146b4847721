//! Line-based reader for the coordinate matrix text format

use hashbrown::HashSet;

use super::constants::HEADER_LINES;
use crate::validation::{parse_header, parse_triple};
use crate::{Entry, FormatError, FormatErrorKind, Result, SparseMatrix};

/// How the reader treats a coordinate that appears on more than one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep every line as its own entry
    #[default]
    Keep,
    /// Fail at the line of the repeated coordinate
    Reject,
}

/// Configuration for [`MatrixParser`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub duplicates: DuplicatePolicy,
}

impl ParseOptions {
    /// Options that reject repeated coordinates
    pub fn strict() -> Self {
        Self {
            duplicates: DuplicatePolicy::Reject,
        }
    }

    /// Set the duplicate coordinate policy
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// Parser turning text lines into a [`SparseMatrix`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixParser {
    options: ParseOptions,
}

impl MatrixParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a matrix from a sequence of lines
    ///
    /// The first two lines are the `rows=` and `cols=` headers. Every later
    /// non-blank line must be a `(row, col, value)` triple; blank lines are
    /// skipped. Entries are kept in line order without zero suppression.
    pub fn parse<I>(&self, lines: I) -> Result<SparseMatrix>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lines = lines.into_iter();

        let rows = read_header(lines.next(), 1)?;
        let cols = read_header(lines.next(), 2)?;

        let mut entries = alloc::vec::Vec::new();
        let mut seen = HashSet::new();

        for (index, line) in lines.enumerate() {
            let line_number = index + HEADER_LINES + 1;
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let (row, col, value) =
                parse_triple(line).map_err(|kind| FormatError::new(line_number, kind))?;

            if self.options.duplicates == DuplicatePolicy::Reject && !seen.insert((row, col)) {
                return Err(
                    FormatError::new(line_number, FormatErrorKind::DuplicateCoordinate).into(),
                );
            }

            entries.push(Entry::new(row, col, value));
        }

        Ok(SparseMatrix::from_entries(rows, cols, entries))
    }

    /// Parse a matrix from a whole text, split on `\n` or `\r\n`
    pub fn parse_str(&self, text: &str) -> Result<SparseMatrix> {
        self.parse(text.lines())
    }
}

fn read_header<S: AsRef<str>>(line: Option<S>, line_number: usize) -> Result<usize> {
    let line = line.ok_or(FormatError::new(line_number, FormatErrorKind::MissingHeader))?;
    parse_header(line.as_ref()).map_err(|kind| FormatError::new(line_number, kind).into())
}

/// Parse lines with the default options
pub fn parse<I>(lines: I) -> Result<SparseMatrix>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    MatrixParser::default().parse(lines)
}

/// Parse a whole text with the default options
pub fn parse_str(text: &str) -> Result<SparseMatrix> {
    MatrixParser::default().parse_str(text)
}
