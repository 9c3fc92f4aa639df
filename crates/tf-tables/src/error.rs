//! Table loading and lookup errors.

use std::path::PathBuf;

use tf_core::TfError;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while loading tables or looking rows up in them.
#[derive(Error, Debug)]
pub enum TableError {
    /// Table is empty, missing, or has no usable keyed rows.
    #[error("Table not found: {what}")]
    NotFound { what: String },

    /// Lookup key is NaN or infinite.
    #[error("Non-finite lookup key for {column}: {value}")]
    NonFiniteKey { column: &'static str, value: f64 },

    /// A key column required by the table kind is absent.
    #[error("Table '{table}' is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    /// CSV structure could not be read.
    #[error("Malformed CSV for table '{table}': {message}")]
    Csv { table: &'static str, message: String },

    /// Underlying file could not be read.
    #[error("Failed to read table file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table was supplied in the slot of a different kind.
    #[error("Expected a {expected} table, got {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Table source configuration could not be parsed.
    #[error("Invalid table source configuration: {message}")]
    Config { message: String },
}

impl From<TableError> for TfError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NotFound { .. } | TableError::MissingColumn { .. } => TfError::Invariant {
                what: err.to_string(),
            },
            other => TfError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
