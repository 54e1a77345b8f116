//! Top-level error type for the command-line entry points.

use thiserror::Error;

use crate::config::error::ConfigError;
use crate::dashboard::SelectionError;
use crate::dataset::DatasetError;
use crate::summary::SummaryError;

/// Any failure that ends a command.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded or written.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The dataset could not be loaded or failed validation.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// The requested view does not exist.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The summary could not be produced.
    #[error(transparent)]
    Summary(#[from] SummaryError),

    /// Terminal or log file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
