use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Raw field input that could not be turned into a transaction value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid date `{0}`. Please enter the date in dd-mm-yyyy format.")]
    InvalidDateFormat(String),
    #[error("Invalid amount `{0}`. Please enter a number such as 42.50.")]
    InvalidAmount(String),
    #[error("Amount must be a positive, non-zero value (got `{0}`).")]
    NonPositiveAmount(String),
    #[error("Invalid category `{0}`. Please enter 'I' for Income or 'E' for Expense.")]
    InvalidCategory(String),
}

/// Failures raised by the ledger table.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write ledger `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read ledger `{path}`: {reason}")]
    Read { path: PathBuf, reason: String },
    #[error("malformed date `{value}` on line {line} of the ledger")]
    DateParse { line: u64, value: String },
    #[error("corrupt ledger row on line {line}: {reason}")]
    CorruptRow { line: u64, reason: String },
}

/// Errors produced while querying a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Configuration load/save failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
