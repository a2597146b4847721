//! Sparse matrix algebra over coordinate lists
//!
//! Every operation takes its operands by reference and returns a new
//! [`SparseMatrix`](crate::SparseMatrix); inputs are never mutated and no
//! operand is densified. Results never contain zero-valued entries.

pub mod elementwise;
pub mod multiply;
pub mod transpose;

pub use elementwise::{add, elementwise, subtract};
pub use multiply::multiply;
pub use transpose::transpose;
