//! Read-only matrix access traits
//!
//! These traits let presentation code query a matrix by position without
//! caring how its entries are stored.

use alloc::vec::Vec;

use crate::SparseMatrix;

/// Core read-only view of a sparse matrix
pub trait MatrixView {
    /// Get the value stored at the specified position
    ///
    /// Returns `None` if no entry is stored there (the cell is zero).
    fn get_element(&self, row: i64, col: i64) -> Option<i64>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored entries
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column slices
pub trait MatrixOperations: MatrixView {
    /// Get all `(col, value)` pairs stored in a row, in entry order
    fn get_row(&self, row_index: i64) -> Vec<(i64, i64)>;

    /// Get all `(row, value)` pairs stored in a column, in entry order
    fn get_col(&self, col_index: i64) -> Vec<(i64, i64)>;
}

impl MatrixView for SparseMatrix {
    fn get_element(&self, row: i64, col: i64) -> Option<i64> {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl MatrixOperations for SparseMatrix {
    fn get_row(&self, row_index: i64) -> Vec<(i64, i64)> {
        self.iter()
            .filter(|e| e.row == row_index)
            .map(|e| (e.col, e.value))
            .collect()
    }

    fn get_col(&self, col_index: i64) -> Vec<(i64, i64)> {
        self.iter()
            .filter(|e| e.col == col_index)
            .map(|e| (e.row, e.value))
            .collect()
    }
}
