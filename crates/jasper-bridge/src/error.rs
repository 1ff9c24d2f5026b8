//! Application-wide error types using thiserror.

use std::path::PathBuf;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BridgeError {
    /// Error from one of the workspace libraries.
    #[error(transparent)]
    Jasper(#[from] jasper_common::JasperError),

    /// An input file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Input {
        /// File that was being read.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// The translations file is not a JSON array of entries.
    #[error("Invalid translations in {}: {source}", .path.display())]
    Translations {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for the bridge application.
pub type BridgeResult<T> = Result<T, BridgeError>;
