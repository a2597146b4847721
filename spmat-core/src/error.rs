//! Error types for SPMAT operations

/// Algebra operation that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        };
        write!(f, "{name}")
    }
}

/// What was wrong with a line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// The input ended before the `rows=`/`cols=` header line
    MissingHeader,
    /// Header line without `=` or without a non-negative integer after it
    InvalidHeader,
    /// Data line that is not a `(row, col, value)` triple
    InvalidEntry,
    /// Coordinate already seen on an earlier line (strict parsing only)
    DuplicateCoordinate,
}

/// Malformed matrix text, located by 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatError {
    pub line: usize,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub const fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self.kind {
            FormatErrorKind::MissingHeader => "Missing header line",
            FormatErrorKind::InvalidHeader => "Invalid header, expected key=integer",
            FormatErrorKind::InvalidEntry => "Invalid format, expected (row, col, value)",
            FormatErrorKind::DuplicateCoordinate => "Duplicate coordinate",
        };
        write!(f, "{msg} on line {}", self.line)
    }
}

/// Operand shapes that do not fit the requested operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionError {
    pub operation: Operation,
    /// (rows, cols) of the left operand
    pub left: (usize, usize),
    /// (rows, cols) of the right operand
    pub right: (usize, usize),
}

impl core::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (lr, lc) = self.left;
        let (rr, rc) = self.right;
        match self.operation {
            Operation::Multiplication => write!(
                f,
                "Matrix multiplication not possible: column/row mismatch ({lr}x{lc} * {rr}x{rc})"
            ),
            op => write!(f, "Matrix dimension mismatch for {op} ({lr}x{lc} vs {rr}x{rc})"),
        }
    }
}

/// Errors that can occur during SPMAT operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Matrix text could not be parsed
    Format(FormatError),
    /// Operand shapes are incompatible
    Dimension(DimensionError),
    /// An intermediate value does not fit in an `i64`
    Overflow(Operation),
}

impl SpmatError {
    /// Line number of a format error, if this is one
    pub fn line(&self) -> Option<usize> {
        match self {
            SpmatError::Format(err) => Some(err.line),
            _ => None,
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::Format(err) => err.fmt(f),
            SpmatError::Dimension(err) => err.fmt(f),
            SpmatError::Overflow(op) => write!(f, "Integer overflow during {op}"),
        }
    }
}

impl core::error::Error for SpmatError {}

impl From<FormatError> for SpmatError {
    fn from(err: FormatError) -> Self {
        SpmatError::Format(err)
    }
}

impl From<DimensionError> for SpmatError {
    fn from(err: DimensionError) -> Self {
        SpmatError::Dimension(err)
    }
}

/// Result type for SPMAT operations
pub type Result<T> = core::result::Result<T, SpmatError>;
