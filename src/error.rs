//! Error taxonomy for loading, normalizing and analyzing a dataset.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DexError>;

#[derive(Debug, Error)]
pub enum DexError {
    /// Input file missing or unreadable
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed header or row. `row` is 1-based and counts the header as row 1.
    #[error("Parse error at row {row}{}: {message}", column_suffix(.column))]
    Parse {
        row: u64,
        column: Option<String>,
        message: String,
    },

    /// Expected column or category cardinality violated
    #[error("Schema error: {0}")]
    Schema(String),

    /// A statistic needs more observations than the data provides
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

impl DexError {
    pub fn schema(message: impl Into<String>) -> Self {
        DexError::Schema(message.into())
    }

    pub fn insufficient(message: impl Into<String>) -> Self {
        DexError::InsufficientData(message.into())
    }
}

fn column_suffix(column: &Option<String>) -> String {
    match column {
        Some(name) => format!(", column {name:?}"),
        None => String::new(),
    }
}
