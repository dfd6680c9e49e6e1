/*!
 * Error types for the mdnorm application.
 *
 * This module contains custom error types for file normalization,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while normalizing one file
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The directory that should contain the file does not exist
    #[error("Directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// The file itself does not exist
    #[error("The file '{}' was not found", .0.display())]
    FileNotFound(PathBuf),

    /// The file is not valid UTF-8
    #[error("The file '{}' is not valid UTF-8", .0.display())]
    InvalidUtf8(PathBuf),

    /// Reading or writing the file failed
    #[error("I/O error on '{}': {}", path.display(), source)]
    Io {
        /// File being processed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl NormalizeError {
    /// Whether the file was skipped before it was read
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::MissingDirectory(_) | Self::FileNotFound(_))
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error while normalizing a file
    #[error("Normalize error: {0}")]
    Normalize(#[from] NormalizeError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
