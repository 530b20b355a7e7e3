use std::{
    fmt, io,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the library manager core.
///
/// Settings errors (`ConfigIo`, `ConfigCorrupt`) are recovered inside the
/// settings store on read and only reach callers from a save. `Network`
/// errors always reach the caller. `Platform` and `Logging` abort startup.
#[derive(Error, Debug)]
pub enum SlmError {
    /// Settings file could not be read or written
    #[error("settings I/O error on '{path}': {details}")]
    ConfigIo {
        /// Path of the settings file
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Settings document is not a readable JSON object
    #[error("settings document at '{path}' is corrupt: {details}")]
    ConfigCorrupt {
        /// Path of the settings file
        path: PathBuf,
        /// Parse error details
        details: String,
    },

    /// Remote endpoint unreachable, timed out or returned an unusable body
    #[error("network error for '{endpoint}': {details}")]
    Network {
        /// URL that was requested
        endpoint: String,
        /// Error details
        details: String,
    },

    /// The executable path or working directory could not be resolved
    #[error("platform error: {0}")]
    Platform(String),

    /// The logger could not be constructed
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// A front end failed after it was started
    #[error("front end error: {0}")]
    FrontEnd(String),

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized `Result` type for core operations.
pub type Result<T> = result::Result<T, SlmError>;

impl SlmError {
    /// Creates a settings I/O error for the given file.
    pub fn config_io(error: impl fmt::Display, path: &Path) -> Self {
        SlmError::ConfigIo {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a corrupt-document error for the given file.
    pub fn config_corrupt(error: impl fmt::Display, path: &Path) -> Self {
        SlmError::ConfigCorrupt {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a network error for the given endpoint.
    pub fn network(error: impl fmt::Display, endpoint: &str) -> Self {
        SlmError::Network {
            endpoint: endpoint.to_string(),
            details: error.to_string(),
        }
    }

    /// Whether this error belongs to the settings path (read/write/corrupt).
    pub fn is_settings_error(&self) -> bool {
        matches!(self, SlmError::ConfigIo { .. } | SlmError::ConfigCorrupt { .. })
    }
}
