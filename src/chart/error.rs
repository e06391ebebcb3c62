use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to read chart file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart is empty (missing header line)")]
    Empty,

    #[error(transparent)]
    Line(#[from] ChartParseError),
}

/// A single malformed chart line.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {reason}")]
pub struct ChartParseError {
    /// 1-based physical line number in the source.
    pub line: usize,
    pub reason: ParseReason,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseReason {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    #[error("invalid number in column `{column}`: {value:?}")]
    InvalidNumber { column: &'static str, value: String },

    #[error("invalid boolean in column `user_played`: {0:?}")]
    InvalidBool(String),
}
