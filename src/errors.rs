use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Column of an export row, used to point at the field that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Date,
    Description,
    Category,
    Amount,
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RowField::Date => "date",
            RowField::Description => "description",
            RowField::Category => "category",
            RowField::Amount => "amount",
        };
        f.write_str(name)
    }
}

/// A single field of a row that could not be turned into a transaction value.
///
/// Carries no position; the reader attaches the line number when it wraps this
/// into [`QueryError::MalformedRow`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {reason}")]
pub struct FieldError {
    pub field: RowField,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: RowField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }

    pub fn missing(field: RowField) -> Self {
        Self::new(field, "missing column")
    }
}

/// Errors that can stop reading or querying a history export.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The export file does not exist or cannot be read
    #[error("Failed to read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data row failed to parse; the whole run is aborted
    #[error("Malformed row at line {line}: {source}")]
    MalformedRow {
        line: u64,
        #[source]
        source: FieldError,
    },

    /// A data row is not valid delimited text
    #[error("Malformed CSV data at line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// Income or expense total does not fit in a decimal
    #[error("Summary total is out of range")]
    SummaryOverflow,

    /// The requested text encoding label is not known
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// The builder was asked to parse without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,
}

impl QueryError {
    /// Line number of the offending row, when the error points at one.
    pub fn line(&self) -> Option<u64> {
        match self {
            QueryError::MalformedRow { line, .. } | QueryError::Csv { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
