//! Dataset error types for loading and validating log count data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building, loading or validating a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Failed to read the dataset file from disk.
    #[error("Failed to read dataset file: {path}")]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("Invalid dataset at {path}:{line}:{column}: {message}")]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line index of the error (0 if unknown).
        line: usize,
        /// One-based column index of the error (0 if unknown).
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// The roster has no people in it.
    #[error("Dataset roster is empty")]
    EmptyRoster,

    /// A month window has no months in it.
    #[error("Month window for {series} is empty")]
    EmptyWindow {
        /// Which series the window belongs to.
        series: String,
    },

    /// A person or series name is empty or whitespace.
    #[error("Dataset contains a blank name")]
    BlankName,

    /// Two roster entries share a display name.
    #[error("Duplicate person in roster: {name}")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },

    /// A count sequence does not line up with its month labels.
    #[error("{name} has {actual} counts but the window has {expected} months")]
    LengthMismatch {
        /// Person or series name.
        name: String,
        /// Number of month labels.
        expected: usize,
        /// Number of counts supplied.
        actual: usize,
    },

    /// A month label is not a `YYYY-MM` calendar month.
    #[error("Invalid month label '{label}', expected YYYY-MM")]
    InvalidMonth {
        /// The rejected label.
        label: String,
    },

    /// Month labels are not in strictly increasing order.
    #[error("Month labels out of order: {previous} is followed by {next}")]
    MonthsOutOfOrder {
        /// Earlier label in the sequence.
        previous: String,
        /// Label that does not come after `previous`.
        next: String,
    },
}
