//! Format constants for the coordinate matrix text format

/// Separates a header key from its integer value
pub const HEADER_SEPARATOR: char = '=';

/// Opens a coordinate triple
pub const OPEN_PAREN: char = '(';

/// Closes a coordinate triple
pub const CLOSE_PAREN: char = ')';

/// Separates the fields of a coordinate triple
pub const FIELD_SEPARATOR: char = ',';

/// Header key written for the row count
pub const ROWS_KEY: &str = "rows";

/// Header key written for the column count
pub const COLS_KEY: &str = "cols";

/// Number of header lines preceding the entries
pub const HEADER_LINES: usize = 2;
