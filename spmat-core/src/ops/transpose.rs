//! Matrix transpose

use crate::{Entry, SparseMatrix};

/// Swap rows and columns, keeping entry order
pub fn transpose(matrix: &SparseMatrix) -> SparseMatrix {
    SparseMatrix::from_entries(
        matrix.cols(),
        matrix.rows(),
        matrix.iter().map(Entry::transposed).collect(),
    )
}
