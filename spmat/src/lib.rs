//! SPMAT - Sparse Coordinate Matrix Calculator
//!
//! This library wires the `spmat-core` model and algebra to the outside
//! world: matrix files on disk, console rendering and an interactive menu.
//!
//! ## Architecture
//!
//! SPMAT follows a core/implementation separation:
//!
//! - **spmat-core**: Data model, text format, algebra and errors (no I/O)
//! - **spmat**: File loading, rendering, menu session and command line
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{load_matrix, ParseOptions};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = ParseOptions::default();
//!     let a = load_matrix("matrixfile1.txt", &options)?;
//!     let b = load_matrix("matrixfile3.txt", &options)?;
//!
//!     let sum = spmat::add(&a, &b)?;
//!     println!("{sum}");
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Data model
    Entry, SparseMatrix,
    // Views
    MatrixOperations, MatrixView,
    // Algebra
    add, multiply, subtract, transpose,
    // Text format
    parse, parse_str, DuplicatePolicy, MatrixParser, ParseOptions,
    // Error handling
    DimensionError, FormatError, FormatErrorKind, Operation, SpmatError,
};

pub mod app;
pub mod config;
pub mod loader;
pub mod render;
pub mod session;

pub use config::{Cli, Commands, OutputFormat};
pub use loader::{load_matrix, LoadError};
pub use session::{Action, MenuChoice, Session};
