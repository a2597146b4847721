//! Console rendering of the tool's banners and result blocks

use log::warn;
use serde::Serialize;
use spmat_core::{MatrixOperations, SparseMatrix};

use crate::config::OutputFormat;

/// Largest row or column count printed as a dense grid
pub const MAX_DENSE_DIM: usize = 64;

const RULE_WIDE: &str = "==================================================";
const RULE_NARROW: &str = "==========================================";

/// Welcome banner printed when the menu starts
pub fn banner() -> String {
    format!("{RULE_WIDE}\n             WELCOME TO MATRIX TOOL               \n{RULE_WIDE}")
}

/// Full-width rule closing the session
pub fn closing_rule() -> &'static str {
    RULE_WIDE
}

/// Separator printed between menu rounds
pub fn divider() -> &'static str {
    "--------------------------------------------------"
}

#[derive(Serialize)]
struct Report<'a> {
    operation: &'a str,
    matrix: &'a SparseMatrix,
}

/// Render the output block for one operation result
pub fn render_result(
    operation: &str,
    matrix: &SparseMatrix,
    format: OutputFormat,
) -> serde_json::Result<String> {
    let body = match format {
        OutputFormat::Text => matrix.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&Report { operation, matrix })?,
        OutputFormat::Dense => render_dense(matrix).unwrap_or_else(|| {
            let (rows, cols) = matrix.dimensions();
            warn!("{rows}x{cols} result is too large for a dense grid, printing coordinates");
            matrix.to_string()
        }),
    };

    Ok(format!(
        "\n================= OUTPUT =================\n\
         Action Performed: {}\n\
         ------------------------------------------\n\
         {body}\n\
         {RULE_NARROW}\n",
        operation.to_uppercase()
    ))
}

/// Render every cell of a small matrix as a right-aligned grid
///
/// Cells with no stored entry print as `0`. When a coordinate repeats, the
/// first stored value is shown. Entries outside the declared shape are not
/// shown. Returns `None` when either dimension exceeds [`MAX_DENSE_DIM`].
pub fn render_dense<M: MatrixOperations + ?Sized>(matrix: &M) -> Option<String> {
    let (rows, cols) = matrix.dimensions();
    if rows > MAX_DENSE_DIM || cols > MAX_DENSE_DIM {
        return None;
    }
    if rows == 0 || cols == 0 {
        return Some(format!("(empty {rows}x{cols} matrix)"));
    }

    let cells: Vec<Vec<String>> = (0..rows as i64)
        .map(|row| {
            let mut values: Vec<Option<i64>> = vec![None; cols];
            for (col, value) in matrix.get_row(row) {
                if let Some(cell) = usize::try_from(col).ok().and_then(|c| values.get_mut(c)) {
                    cell.get_or_insert(value);
                }
            }
            values
                .into_iter()
                .map(|value| value.unwrap_or(0).to_string())
                .collect()
        })
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(1);

    let lines: Vec<String> = cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{cell:>width$}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseMatrix {
        SparseMatrix::from_triplets(2, 3, [(0, 0, 1), (1, 2, -12), (5, 5, 9)])
    }

    #[test]
    fn test_text_block() {
        let out = render_result("Addition", &sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "\n================= OUTPUT =================\n\
             Action Performed: ADDITION\n\
             ------------------------------------------\n\
             rows=2\ncols=3\n(0, 0, 1)\n(1, 2, -12)\n(5, 5, 9)\n\
             ==========================================\n"
        );
    }

    #[test]
    fn test_json_block() {
        let out = render_result("Subtraction", &sample(), OutputFormat::Json).unwrap();
        let json_start = out.find('{').unwrap();
        let json_end = out.rfind('}').unwrap();
        let value: serde_json::Value = serde_json::from_str(&out[json_start..=json_end]).unwrap();
        assert_eq!(value["operation"], "Subtraction");
        assert_eq!(value["matrix"]["rows"], 2);
        assert_eq!(value["matrix"]["entries"][1]["value"], -12);
    }

    #[test]
    fn test_dense_grid() {
        let grid = render_dense(&sample()).unwrap();
        assert_eq!(grid, "  1   0   0\n  0   0 -12");
    }

    #[test]
    fn test_dense_first_duplicate_wins() {
        let cells = [(0, 2, 4), (0, -1, 9), (0, 2, 5), (0, 0, -3)];
        let m = SparseMatrix::from_triplets(1, 3, cells);
        assert_eq!(render_dense(&m).unwrap(), "-3  0  4");
    }

    #[test]
    fn test_dense_limits() {
        assert_eq!(
            render_dense(&SparseMatrix::new(0, 4)).unwrap(),
            "(empty 0x4 matrix)"
        );
        assert!(render_dense(&SparseMatrix::new(MAX_DENSE_DIM + 1, 1)).is_none());

        // Oversized results fall back to coordinate text
        let big = SparseMatrix::from_triplets(100, 100, [(99, 99, 1)]);
        let out = render_result("Multiplication", &big, OutputFormat::Dense).unwrap();
        assert!(out.contains("(99, 99, 1)"));
    }

    #[test]
    fn test_banner_and_divider() {
        assert!(banner().contains("WELCOME TO MATRIX TOOL"));
        assert_eq!(divider().len(), closing_rule().len());
    }
}
