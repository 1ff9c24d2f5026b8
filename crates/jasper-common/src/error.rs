//! Error types and utilities for Jasper Bridge

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Jasper Bridge operations
pub type Result<T> = std::result::Result<T, JasperError>;

/// Main error type for Jasper Bridge operations
#[derive(Error, Debug)]
pub enum JasperError {
    /// The report has no template content to materialize
    #[error("Missing report file for report '{report}'")]
    MissingContent {
        /// Name of the report whose content was empty
        report: String,
    },

    /// A subreport referenced by a template is not registered
    #[error("Subreport ({name}) not found")]
    SubreportNotFound {
        /// Fully qualified name of the missing subreport
        name: String,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text could not be represented in the requested encoding
    #[error("Cannot encode text as {encoding} for {}", .path.display())]
    Encoding {
        /// Name of the target encoding
        encoding: String,
        /// File that was being written
        path: PathBuf,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The external report renderer failed
    #[error("Render error: {message}")]
    Render {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Report input data could not be generated
    #[error("Data generation error: {message}")]
    DataGeneration {
        /// Human readable description
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl JasperError {
    /// Create a missing content error for the given report
    pub fn missing_content(report: impl Into<String>) -> Self {
        Self::MissingContent {
            report: report.into(),
        }
    }

    /// Create a subreport lookup error
    pub fn subreport_not_found(name: impl Into<String>) -> Self {
        Self::SubreportNotFound { name: name.into() }
    }

    /// Create an encoding error
    pub fn encoding(encoding: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Encoding {
            encoding: encoding.into(),
            path: path.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data generation error
    pub fn data_generation(msg: impl Into<String>) -> Self {
        Self::DataGeneration {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new data generation error with source
    pub fn data_generation_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataGeneration {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the error came from the filesystem
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Short machine friendly category, used as a structured log field
    pub const fn category(&self) -> &'static str {
        match self {
            Self::MissingContent { .. } => "missing_content",
            Self::SubreportNotFound { .. } => "subreport_not_found",
            Self::Io(_) => "io",
            Self::Encoding { .. } => "encoding",
            Self::Config { .. } => "config",
            Self::Render { .. } => "render",
            Self::DataGeneration { .. } => "data_generation",
            Self::Serialization(_) => "serialization",
        }
    }
}
