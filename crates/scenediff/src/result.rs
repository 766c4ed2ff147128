//! Result and error types for Scenediff.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Scenediff operations
pub type ScenediffResult<T> = Result<T, ScenediffError>;

/// Errors that can occur while comparing scenes
#[derive(Debug, Error)]
pub enum ScenediffError {
    /// An input image could not be opened or decoded
    #[error("Failed to decode {}: {message}", path.display())]
    ImageDecode {
        /// Path of the image that failed
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// A composite image could not be encoded or written
    #[error("Failed to write composite {}: {message}", path.display())]
    ImageEncode {
        /// Destination of the composite
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Two images were handed to the diff engine with different sizes
    #[error("Image dimensions differ: baseline {baseline_width}x{baseline_height}, capture {capture_width}x{capture_height}")]
    DimensionMismatch {
        /// Baseline width
        baseline_width: u32,
        /// Baseline height
        baseline_height: u32,
        /// Capture width
        capture_width: u32,
        /// Capture height
        capture_height: u32,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScenediffError {
    /// Create a decode error for `path`
    #[must_use]
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ImageDecode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an encode error for `path`
    #[must_use]
    pub fn encode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ImageEncode {
            path: path.into(),
            message: message.into(),
        }
    }
}
