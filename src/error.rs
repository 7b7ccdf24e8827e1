//! Error types for vartab.

use std::fmt;
use std::io;

use polars::error::PolarsError;

/// Result type alias for vartab operations.
pub type Result<T> = std::result::Result<T, VartabError>;

/// Errors raised while building an annotation table.
///
/// Every variant is unrecoverable at the point of detection: the pipeline
/// aborts rather than emitting a silently misaligned table. Messages carry
/// the offending row or column so failures can be traced back to the input
/// streams.
#[derive(Debug)]
pub enum VartabError {
    /// The input stream held no table data at all.
    EmptyInput,

    /// A data line arrived before any header line.
    DataBeforeHeader {
        /// 1-based line number in the annotation stream
        line: usize,
    },

    /// A line's field count differs from the declared column count.
    FieldCountMismatch {
        /// 1-based line number
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// The same sample identifier appeared twice in the roster.
    DuplicateSample { name: String },

    /// Both joined tables carry a column with this name.
    ColumnCollision { name: String },

    /// The joined tables disagree on row count.
    RowMisalignment { left: usize, right: usize },

    /// An allele-depth value did not parse as `"ref,alt"`.
    MalformedDepthField {
        column: String,
        /// 0-based data row index
        row: usize,
        value: String,
    },

    /// Underlying polars failure.
    Polars(PolarsError),

    /// I/O failure.
    Io(io::Error),
}

impl fmt::Display for VartabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VartabError::EmptyInput => {
                write!(f, "input stream holds no table data")
            },
            VartabError::DataBeforeHeader { line } => {
                write!(f, "line {}: data line arrived before any header line", line)
            },
            VartabError::FieldCountMismatch {
                line,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "line {}: expected {} tab-separated fields, found {}",
                    line, expected, actual
                )
            },
            VartabError::DuplicateSample { name } => {
                write!(f, "duplicate sample identifier '{}'", name)
            },
            VartabError::ColumnCollision { name } => {
                write!(f, "column '{}' exists in both tables", name)
            },
            VartabError::RowMisalignment { left, right } => {
                write!(f, "tables disagree on row count: {} vs {}", left, right)
            },
            VartabError::MalformedDepthField { column, row, value } => {
                write!(
                    f,
                    "column '{}', row {}: malformed allele depth '{}'",
                    column, row, value
                )
            },
            VartabError::Polars(e) => write!(f, "{}", e),
            VartabError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for VartabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VartabError::Polars(e) => Some(e),
            VartabError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PolarsError> for VartabError {
    fn from(error: PolarsError) -> Self {
        VartabError::Polars(error)
    }
}

impl From<io::Error> for VartabError {
    fn from(error: io::Error) -> Self {
        VartabError::Io(error)
    }
}
