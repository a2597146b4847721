//! Coordinate matrix text format
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! The reader turns lines into a [`SparseMatrix`](crate::SparseMatrix) and
//! the writer produces text the reader accepts.

pub mod constants;
pub mod reader;
pub mod writer;

pub use reader::{parse, parse_str, DuplicatePolicy, MatrixParser, ParseOptions};
pub use writer::write_matrix;
