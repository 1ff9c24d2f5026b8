//! Configuration schema definitions using serde.

use jasper_common::{GroupingPolicy, LanguageSuffix, LogFormat, LoggingConfig, PropertiesEncoding};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Jasper Bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report resource resolution.
    pub resolver: ResolverConfig,
    /// Properties file output.
    pub properties: PropertiesConfig,
    /// Temporary file handling.
    pub storage: StorageConfig,
    /// Database the report server reads from.
    pub database: DatabaseConfig,
    /// Logging output.
    pub logging: LogConfig,
}

/// Report resource resolution configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Prefix of freshly created working directories.
    pub temp_dir_prefix: String,
    /// How translations are split into properties files.
    pub grouping: GroupingPolicy,
    /// Which part of a language tag names a properties file.
    pub language_suffix: LanguageSuffix,
    /// Namespace prepended to subreport names when looking them up.
    pub catalog_namespace: String,
}

/// Properties file configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertiesConfig {
    /// Text encoding of written properties files.
    pub encoding: PropertiesEncoding,
}

/// Temporary file configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Whether staged report input files are removed after rendering.
    pub unlink_temporary_files: bool,
}

/// Database connection handed to the report server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host, `localhost` when unset.
    pub host: Option<String>,
    /// Database port, `5432` when unset.
    pub port: Option<u16>,
    /// Database name.
    pub name: String,
    /// Database user, the OS user when unset.
    pub user: Option<String>,
    /// Database password, empty when unset.
    pub password: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directives, e.g. `info` or `jasper_reports=debug`.
    pub level: String,
    /// Line format.
    pub format: LogFormat,
    /// Append logs to this file instead of stderr.
    pub file_path: Option<PathBuf>,
    /// Log span open/close events.
    pub span_events: bool,
}

impl LogConfig {
    /// Converts into the logging setup understood by `jasper_common`.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            filter: self.level.clone(),
            format: self.format,
            file_path: self.file_path.clone(),
            span_events: self.span_events,
            ..LoggingConfig::default()
        }
    }
}
