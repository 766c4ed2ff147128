//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Comparison failed hard (decode or composite write)
    #[error("Comparison failed: {0}")]
    Scenediff(#[from] scenediff::ScenediffError),

    /// An output file or directory could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Report generation error
    #[error("Report generation failed: {message}")]
    ReportGeneration {
        /// Error message
        message: String,
    },

    /// Logging could not be initialised
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a write error for `path`
    #[must_use]
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a report generation error
    #[must_use]
    pub fn report_generation(message: impl Into<String>) -> Self {
        Self::ReportGeneration {
            message: message.into(),
        }
    }

    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CliError::write("out/summary.json", io_err);
        assert!(err.to_string().contains("out/summary.json"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_report_generation_error() {
        let err = CliError::report_generation("bad json");
        assert!(err.to_string().contains("Report"));
    }

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("already set");
        assert!(err.to_string().contains("Logging"));
    }

    #[test]
    fn test_scenediff_error_from() {
        let inner = scenediff::ScenediffError::decode("a.png", "truncated");
        let err: CliError = inner.into();
        assert!(err.to_string().contains("Comparison failed"));
        assert!(err.to_string().contains("a.png"));
    }
}
