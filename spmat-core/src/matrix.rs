//! Coordinate-list sparse matrix value type
//!
//! A [`SparseMatrix`] stores only its non-zero cells as `(row, col, value)`
//! triples in insertion order. Values are built once (by the parser or as the
//! result of an algebra operation) and never mutated afterwards.

use alloc::vec::Vec;
use hashbrown::HashSet;

/// One stored cell of a sparse matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: i64,
    pub col: i64,
    pub value: i64,
}

impl Entry {
    pub const fn new(row: i64, col: i64, value: i64) -> Self {
        Self { row, col, value }
    }

    /// `(row, col)` key of this entry
    pub const fn coord(&self) -> (i64, i64) {
        (self.row, self.col)
    }

    /// Same value with row and column swapped
    pub const fn transposed(&self) -> Self {
        Self {
            row: self.col,
            col: self.row,
            value: self.value,
        }
    }
}

impl From<(i64, i64, i64)> for Entry {
    fn from((row, col, value): (i64, i64, i64)) -> Self {
        Self { row, col, value }
    }
}

/// Sparse matrix in coordinate-list form
///
/// Entry coordinates are not bounds-checked against `rows`/`cols`; that is
/// the producer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given shape
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
        }
    }

    /// Create a matrix from entries, kept exactly as given
    pub fn from_entries(rows: usize, cols: usize, entries: Vec<Entry>) -> Self {
        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Create a matrix from `(row, col, value)` triples
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64, i64)>,
    {
        Self::from_entries(rows, cols, triplets.into_iter().map(Entry::from).collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Stored entries in order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Value of the first entry stored at `(row, col)`
    pub fn get(&self, row: i64, col: i64) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.row == row && e.col == col)
            .map(|e| e.value)
    }

    /// Whether any coordinate is stored more than once
    pub fn has_duplicate_coordinates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries.iter().any(|e| !seen.insert(e.coord()))
    }
}

impl<'a> IntoIterator for &'a SparseMatrix {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
