#![no_std]

//! SPMAT Core - Sparse Coordinate Matrix Definitions
//!
//! This crate provides the coordinate-list matrix model, its text format
//! and the sparse algebra over it. It performs no I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{parse, parse_str, write_matrix, DuplicatePolicy, MatrixParser, ParseOptions};
pub use matrix::{Entry, SparseMatrix};
pub use ops::{add, elementwise, multiply, subtract, transpose};
pub use traits::{MatrixOperations, MatrixView};
