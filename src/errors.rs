// Error types for launchdash

use snafu::Snafu;
use std::{io, path::PathBuf};

#[derive(Debug, Snafu)]
pub enum LaunchDashError {
    // Dataset loading errors
    #[snafu(display("Could not open dataset file {path:?}"))]
    DatasetOpen { path: PathBuf, source: io::Error },
    #[snafu(display("Error reading dataset header"))]
    DatasetHeader { source: csv::Error },
    #[snafu(display(
        "Dataset is missing expected columns {missing:?}. Found columns: {found:?}"
    ))]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },
    #[snafu(display("Invalid launch record at row {row}"))]
    InvalidRecord { row: usize, source: csv::Error },
    #[snafu(display("Empty {column:?} value at row {row}"))]
    EmptyField { row: usize, column: &'static str },
    #[snafu(display("Invalid payload mass {value} at row {row}, expected a finite number of kg"))]
    InvalidPayloadMass { row: usize, value: f64 },
    #[snafu(display("Invalid outcome class {value}, expected 0 or 1"))]
    InvalidOutcomeClass { value: f64 },

    // Selection errors
    #[snafu(display("Invalid payload range [{low}, {high}]"))]
    InvalidPayloadRange { low: f64, high: f64 },

    // Errors for the points exporter
    #[snafu(display("Error writing export file {path:?}"))]
    ExportError { path: PathBuf, source: io::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },

    // UI errors
    #[snafu(display("Could not start dashboard: {description}"))]
    DashboardStartError { description: String },
}
