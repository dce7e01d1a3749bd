use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("{} not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("Missing required column '{column}' in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid numeric value for '{column}' at line {line} of {}", path.display())]
    InvalidValue {
        path: PathBuf,
        line: usize,
        column: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Series '{series}' has {actual} rows, expected {expected} to match the 2PL baseline")]
    SeriesLengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("No plottable data for the {chart} chart: {reason}")]
    EmptyData { chart: &'static str, reason: String },

    #[error("Failed to read {}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
