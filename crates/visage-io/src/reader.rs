//! Table reader trait and common types
//!
//! The `TableReader` trait provides a uniform interface for loading a
//! whole table into memory. Inputs are modest tabular files, so readers
//! parse eagerly.

use std::path::Path;

use thiserror::Error;
use visage_stats::StatsError;

use crate::dataset::Dataset;
use crate::schema::DataSchema;

/// Errors that can occur during ingestion
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Unsupported column count: {found} (expected {expected})")]
    UnsupportedColumnCount { found: usize, expected: usize },

    #[error("Cannot summarize column '{column}': {source}")]
    Statistics {
        column: String,
        #[source]
        source: StatsError,
    },
}

/// Result type for ingestion operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for readers that load a complete table
pub trait TableReader {
    /// Column names and inferred types
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Parse every record into a dataset
    fn read_table(&self) -> IoResult<Dataset>;

    /// Get the format name
    fn format_name(&self) -> &'static str;

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn TableReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: &str) -> IoResult<BoxedReader> {
    let extension = Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => Ok(Box::new(crate::csv_reader::CsvReader::open(path)?)),
        "tsv" => Ok(Box::new(crate::csv_reader::CsvReader::open_with_options(
            path, b'\t',
        )?)),
        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension '{}' (supported: {})",
            extension,
            supported_extensions().join(", ")
        ))),
    }
}

/// List supported file extensions
pub fn supported_extensions() -> Vec<&'static str> {
    vec!["csv", "tsv"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_unknown_extension() {
        let err = open_file("data.parquet").err().unwrap();
        assert!(matches!(err, IoError::InvalidFormat(_)));
        assert!(err.to_string().contains("supported: csv, tsv"));
    }

    #[test]
    fn test_dot_in_directory_is_not_an_extension() {
        let err = open_file("exports.v2/data").err().unwrap();
        let msg = err.to_string();
        assert!(msg.contains("Unknown file extension ''"), "{msg}");

        // Dotted directory, real extension: detected as CSV, then missing
        assert!(matches!(
            open_file("exports.v2/data.CSV").err().unwrap(),
            IoError::FileNotFound(_)
        ));
    }

    #[test]
    fn test_statistics_error_display() {
        let err = IoError::Statistics {
            column: "height".to_string(),
            source: StatsError::EmptyColumn,
        };
        let msg = err.to_string();
        assert!(msg.contains("height"));
        assert!(msg.contains("no numeric values"));
    }
}
