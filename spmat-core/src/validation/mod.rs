//! Line validation utilities for the coordinate matrix text format
//!
//! This module contains pure parsing functions with no I/O dependencies.

pub mod parsing;

pub use parsing::{parse_header, parse_triple};
