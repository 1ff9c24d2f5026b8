//! Structured logging infrastructure for Jasper Bridge

use crate::error::JasperError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Filter used when the configured one does not parse.
const FALLBACK_FILTER: &str = "info";

/// Filter for local debugging of the workspace crates.
const DEV_FILTER: &str =
    "info,jasper_reports=debug,jasper_render=debug,jasper_i18n=debug,jasper_config=debug";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented.
    Pretty,
    /// One line per event.
    #[default]
    Compact,
    /// JSON lines.
    Json,
}

impl FromStr for LogFormat {
    type Err = JasperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(JasperError::config(format!("Unsupported log format: {other}"))),
        }
    }
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives (e.g., "info", "jasper_reports=trace")
    pub filter: String,
    /// Line format
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr
    pub file_path: Option<PathBuf>,
    /// Log span open/close events, which carry resolve and render timings
    pub span_events: bool,
    /// Include the emitting module
    pub with_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: FALLBACK_FILTER.to_string(),
            format: LogFormat::default(),
            file_path: None,
            span_events: false,
            with_targets: true,
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so that command output on stdout stays clean. Fails if
/// a subscriber is already installed or the log file cannot be opened.
pub fn init_logging(config: LoggingConfig) -> InitResult {
    let filter =
        EnvFilter::try_new(&config.filter).or_else(|_| EnvFilter::try_new(FALLBACK_FILTER))?;

    let writer = match &config.file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Arc::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.file_path.is_none())
        .with_span_events(span_events)
        .with_target(config.with_targets);

    let layer = match config.format {
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Pretty output with debug events from the workspace crates and span timings.
pub fn init_dev_logging() -> InitResult {
    init_logging(LoggingConfig {
        filter: DEV_FILTER.to_string(),
        format: LogFormat::Pretty,
        span_events: true,
        ..LoggingConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.file_path.is_none());
        assert!(!config.span_events);
    }

    #[test]
    fn test_format_labels() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
        assert_eq!(serde_json::to_string(&LogFormat::Pretty).unwrap(), "\"pretty\"");
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_dev_filter_parses() {
        assert!(EnvFilter::try_new(DEV_FILTER).is_ok());
    }
}
