//! Abstract interfaces for sparse matrix access
//!
//! This module defines the trait abstractions used by presentation code.

pub mod matrix;

pub use matrix::{MatrixOperations, MatrixView};
