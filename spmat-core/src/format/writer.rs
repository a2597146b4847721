//! Writer for the coordinate matrix text format

use core::fmt::{self, Write};

use super::constants::{COLS_KEY, HEADER_SEPARATOR, ROWS_KEY};
use crate::SparseMatrix;

/// Write `matrix` in the text format accepted by the reader
///
/// Emits the `rows=`/`cols=` headers followed by one `(row, col, value)`
/// line per entry in entry order.
pub fn write_matrix<W: Write>(matrix: &SparseMatrix, out: &mut W) -> fmt::Result {
    writeln!(out, "{ROWS_KEY}{HEADER_SEPARATOR}{}", matrix.rows())?;
    write!(out, "{COLS_KEY}{HEADER_SEPARATOR}{}", matrix.cols())?;
    for entry in matrix {
        write!(out, "\n({}, {}, {})", entry.row, entry.col, entry.value)?;
    }
    Ok(())
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(self, f)
    }
}
