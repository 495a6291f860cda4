//! Error handling for the dashboard pipeline.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use rust_xlsxwriter::XlsxError;

/// Errors that can occur while generating, summarizing or exporting the dataset
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Error building or reading Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error converting rows to record batches
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_arrow::Error),

    /// Error writing the workbook
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] XlsxError),

    /// Error opening or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error while drawing a chart
    #[error("Chart error: {0}")]
    Chart(String),

    /// A chart image was not on disk when the workbook needed it
    #[error("Chart image not found: {}", path.display())]
    MissingChart {
        /// Expected location of the image
        path: PathBuf,
    },

    /// A table is missing an expected column
    #[error("Column not found: {column}")]
    ColumnNotFound {
        /// Name of the missing column
        column: String,
    },

    /// A column exists but has an unexpected Arrow type
    #[error("Column '{column}' is not of type {expected}")]
    ColumnType {
        /// Name of the column
        column: String,
        /// Type the caller asked for
        expected: String,
    },

    /// Invalid simulation configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Wrap a drawing failure from the chart backend
    pub fn chart<E: std::fmt::Display>(context: &str, error: E) -> Self {
        Self::Chart(format!("{context}: {error}"))
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
