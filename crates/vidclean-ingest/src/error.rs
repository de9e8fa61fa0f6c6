//! Error types for dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the dataset file.
///
/// Everything here is fatal: the pipeline refuses to run on a source it
/// cannot fully read, and a failed write aborts the run after cleaning.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File carries a byte-order mark for an encoding we do not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File decodes under neither UTF-8 nor the GBK fallback.
    #[error("{path} is not valid UTF-8 or GBK")]
    Undecodable { path: PathBuf },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// File contains no header row or no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Failed to write the cleaned output.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/videos.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/videos.csv");

        let err = IngestError::Undecodable {
            path: PathBuf::from("/data/videos.csv"),
        };
        assert_eq!(err.to_string(), "/data/videos.csv is not valid UTF-8 or GBK");
    }
}
