//! Error types for climtrend-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the climtrend-io crate.
///
/// These are structural failures: the input as a whole cannot be read as
/// tabular data. Defects confined to single rows are not reported here.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the input file exists but cannot be opened or read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps an error from the CSV parser.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is absent from the header row.
    #[error("column '{name}' not found in header")]
    MissingColumn {
        /// Name of the missing column.
        name: String,
    },

    /// Returned when one or more configuration checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_read() {
        let err = IoError::Read {
            path: PathBuf::from("/tmp/locked.csv"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read /tmp/locked.csv: permission denied"
        );
    }

    #[test]
    fn display_missing_column() {
        let err = IoError::MissingColumn {
            name: "Ktemp".to_string(),
        };
        assert_eq!(err.to_string(), "column 'Ktemp' not found in header");
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 2,
            details: "time column is empty; temperature column is empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "2 validation error(s): time column is empty; temperature column is empty"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
