//! Element-wise addition and subtraction

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::{DimensionError, Entry, Operation, Result, SparseMatrix, SpmatError};

/// Combine two equally shaped matrices cell by cell
///
/// `combine(a, b)` receives the left and right value at a coordinate (0 for
/// a missing cell) and returns `None` on overflow. Output order is the left
/// operand's entries in order, then the right operand's entries at
/// coordinates the left one never touched.
///
/// The right operand is indexed once by coordinate, and each left entry
/// consumes the key it matches. A coordinate repeated in the left operand
/// therefore pairs with the right value only on its first occurrence; later
/// occurrences see 0.
pub fn elementwise<F>(
    a: &SparseMatrix,
    b: &SparseMatrix,
    operation: Operation,
    combine: F,
) -> Result<SparseMatrix>
where
    F: Fn(i64, i64) -> Option<i64>,
{
    if a.dimensions() != b.dimensions() {
        return Err(DimensionError {
            operation,
            left: a.dimensions(),
            right: b.dimensions(),
        }
        .into());
    }

    // Later duplicates in `b` overwrite earlier ones
    let mut lookup: HashMap<(i64, i64), i64> = b.iter().map(|e| (e.coord(), e.value)).collect();
    let mut entries = Vec::with_capacity(a.nnz() + b.nnz());

    for entry in a {
        let b_value = lookup.remove(&entry.coord()).unwrap_or(0);
        let value = combine(entry.value, b_value).ok_or(SpmatError::Overflow(operation))?;
        if value != 0 {
            entries.push(Entry::new(entry.row, entry.col, value));
        }
    }

    for entry in b {
        if !lookup.contains_key(&entry.coord()) {
            continue;
        }
        let value = combine(0, entry.value).ok_or(SpmatError::Overflow(operation))?;
        if value != 0 {
            entries.push(Entry::new(entry.row, entry.col, value));
        }
    }

    Ok(SparseMatrix::from_entries(a.rows(), a.cols(), entries))
}

/// `a + b`
pub fn add(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    elementwise(a, b, Operation::Addition, i64::checked_add)
}

/// `a - b`
pub fn subtract(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    elementwise(a, b, Operation::Subtraction, i64::checked_sub)
}
