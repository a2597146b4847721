//! Sparse matrix multiplication by row accumulation

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::{DimensionError, Entry, Operation, Result, SparseMatrix, SpmatError};

/// Stored cells of one row of the right operand
///
/// Non-negative columns iterate in ascending order, followed by negative
/// columns in the order they first appeared. A repeated column keeps its
/// position and takes the later value.
#[derive(Default)]
struct RowCells {
    ascending: BTreeMap<i64, i64>,
    negative: Vec<(i64, i64)>,
}

impl RowCells {
    fn insert(&mut self, col: i64, value: i64) {
        if col >= 0 {
            self.ascending.insert(col, value);
        } else if let Some(cell) = self.negative.iter_mut().find(|(c, _)| *c == col) {
            cell.1 = value;
        } else {
            self.negative.push((col, value));
        }
    }

    fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.ascending
            .iter()
            .map(|(&col, &value)| (col, value))
            .chain(self.negative.iter().copied())
    }
}

/// `a * b`
///
/// Each left entry `(r, k, v)` is multiplied against the stored cells of row
/// `k` of `b`, accumulating into output cell `(r, c)`. Work is proportional
/// to the number of such products rather than to `rows * cols * inner`.
///
/// Output cells appear in the order they were first touched: left entries in
/// order, and within a row of `b`, non-negative columns ascending then
/// negative columns as first seen. Cells whose total is 0 are dropped.
///
/// Totals are accumulated in `i128`, so only a final total outside the `i64`
/// range is reported as [`SpmatError::Overflow`].
pub fn multiply(a: &SparseMatrix, b: &SparseMatrix) -> Result<SparseMatrix> {
    if a.cols() != b.rows() {
        return Err(DimensionError {
            operation: Operation::Multiplication,
            left: a.dimensions(),
            right: b.dimensions(),
        }
        .into());
    }

    let overflow = SpmatError::Overflow(Operation::Multiplication);

    let mut b_rows: HashMap<i64, RowCells> = HashMap::new();
    for entry in b {
        b_rows
            .entry(entry.row)
            .or_default()
            .insert(entry.col, entry.value);
    }

    let mut slots: HashMap<(i64, i64), usize> = HashMap::new();
    let mut totals: Vec<(i64, i64, i128)> = Vec::new();

    for a_entry in a {
        let Some(b_row) = b_rows.get(&a_entry.col) else {
            continue;
        };

        for (b_col, b_value) in b_row.iter() {
            let product = i128::from(a_entry.value) * i128::from(b_value);
            let slot = *slots.entry((a_entry.row, b_col)).or_insert_with(|| {
                totals.push((a_entry.row, b_col, 0));
                totals.len() - 1
            });
            let total = &mut totals[slot].2;
            *total = total.checked_add(product).ok_or(overflow)?;
        }
    }

    let entries = totals
        .into_iter()
        .filter(|&(_, _, total)| total != 0)
        .map(|(row, col, total)| {
            i64::try_from(total)
                .map(|value| Entry::new(row, col, value))
                .map_err(|_| overflow)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SparseMatrix::from_entries(a.rows(), b.cols(), entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: usize, cols: usize, triplets: &[(i64, i64, i64)]) -> SparseMatrix {
        SparseMatrix::from_triplets(rows, cols, triplets.iter().copied())
    }

    #[test]
    fn test_row_times_column() {
        let a = matrix(1, 2, &[(0, 0, 2), (0, 1, 3)]);
        let b = matrix(2, 1, &[(0, 0, 4), (1, 0, 5)]);
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.dimensions(), (1, 1));
        assert_eq!(product.entries(), &[Entry::new(0, 0, 23)][..]);
    }

    #[test]
    fn test_first_touched_order() {
        // a = [[0, 1], [2, 0]], b = [[0, 3, 4], [5, 0, 6]]
        let a = matrix(2, 2, &[(1, 0, 2), (0, 1, 1)]);
        let b = matrix(2, 3, &[(0, 2, 4), (1, 2, 6), (0, 1, 3), (1, 0, 5)]);
        let product = multiply(&a, &b).unwrap();
        assert_eq!(product.dimensions(), (2, 3));
        assert_eq!(
            product.entries(),
            &[
                Entry::new(1, 1, 6),
                Entry::new(1, 2, 8),
                Entry::new(0, 0, 5),
                Entry::new(0, 2, 6),
            ][..]
        );
    }

    #[test]
    fn test_cancelling_products_are_suppressed() {
        let a = matrix(1, 2, &[(0, 0, 1), (0, 1, -1)]);
        let b = matrix(2, 1, &[(0, 0, 7), (1, 0, 7)]);
        let product = multiply(&a, &b).unwrap();
        assert!(product.is_empty());
        assert_eq!(product.dimensions(), (1, 1));
    }

    #[test]
    fn test_identity() {
        let identity = matrix(3, 3, &[(0, 0, 1), (1, 1, 1), (2, 2, 1)]);
        let m = matrix(3, 2, &[(0, 1, 4), (2, 0, -2)]);
        assert_eq!(multiply(&identity, &m).unwrap(), m);
    }

    #[test]
    fn test_inner_dimension_mismatch() {
        let a = matrix(2, 3, &[]);
        let b = matrix(2, 3, &[]);
        assert_eq!(
            multiply(&a, &b).unwrap_err(),
            SpmatError::Dimension(DimensionError {
                operation: Operation::Multiplication,
                left: (2, 3),
                right: (2, 3),
            })
        );
    }

    #[test]
    fn test_missing_rows_in_right_operand() {
        let a = matrix(2, 2, &[(0, 1, 3)]);
        let b = matrix(2, 2, &[(0, 0, 9)]);
        assert!(multiply(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_right_coordinate_keeps_last_value() {
        let a = matrix(1, 1, &[(0, 0, 2)]);
        let b = matrix(1, 1, &[(0, 0, 3), (0, 0, 10)]);
        assert_eq!(multiply(&a, &b).unwrap().entries(), &[Entry::new(0, 0, 20)][..]);
    }

    #[test]
    fn test_partial_sum_outside_range_is_not_overflow() {
        let a = matrix(1, 3, &[(0, 0, i64::MAX), (0, 1, 1), (0, 2, -1)]);
        let b = matrix(3, 1, &[(0, 0, 1), (1, 0, 1), (2, 0, 1)]);
        assert_eq!(
            multiply(&a, &b).unwrap().entries(),
            &[Entry::new(0, 0, i64::MAX)][..]
        );

        let reordered = matrix(1, 3, &[(0, 2, -1), (0, 0, i64::MAX), (0, 1, 1)]);
        let expected = multiply(&a, &b).unwrap();
        assert_eq!(multiply(&reordered, &b).unwrap(), expected);
    }

    #[test]
    fn test_min_times_min_overflows_only_on_narrowing() {
        let a = matrix(1, 1, &[(0, 0, i64::MIN)]);
        let b = matrix(1, 1, &[(0, 0, i64::MIN)]);
        assert_eq!(
            multiply(&a, &b).unwrap_err(),
            SpmatError::Overflow(Operation::Multiplication)
        );
    }

    #[test]
    fn test_negative_columns_follow_non_negative_ones() {
        let a = matrix(1, 1, &[(0, 0, 1)]);
        let cells = [(0, -3, 7), (0, 1, 3), (0, -1, 2), (0, 0, 4), (0, -3, 8)];
        let b = matrix(1, 2, &cells);
        assert_eq!(
            multiply(&a, &b).unwrap().entries(),
            &[
                Entry::new(0, 0, 4),
                Entry::new(0, 1, 3),
                Entry::new(0, -3, 8),
                Entry::new(0, -1, 2),
            ][..]
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        let a = matrix(1, 1, &[(0, 0, i64::MAX)]);
        let b = matrix(1, 1, &[(0, 0, 2)]);
        assert_eq!(
            multiply(&a, &b).unwrap_err(),
            SpmatError::Overflow(Operation::Multiplication)
        );
    }
}
