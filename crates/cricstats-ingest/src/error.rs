//! Error types for data ingestion.

use std::path::PathBuf;

use cricstats_model::SchemaError;
use thiserror::Error;

/// Errors that can occur while loading a source.
///
/// Malformed cell values are not errors; they surface later as unknown fields.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (bad quoting, unreadable stream).
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Workbook cannot be opened or its first worksheet cannot be read.
    #[error("failed to read workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Source has no header row (or, for a workbook, no worksheet).
    #[error("source is empty: {path}")]
    EmptyTable { path: PathBuf },

    /// Header row does not satisfy the column schema.
    #[error("schema mismatch in {path}: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// Live-score document is not valid JSON of the expected shape.
    #[error("failed to parse live-score document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/players.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /data/players.csv");
    }

    #[test]
    fn test_schema_error_display() {
        let err = IngestError::Schema {
            path: PathBuf::from("matches.csv"),
            source: SchemaError::MissingColumn { column: "Winner" },
        };
        assert_eq!(
            err.to_string(),
            "schema mismatch in matches.csv: required column 'Winner' not found"
        );
    }
}
