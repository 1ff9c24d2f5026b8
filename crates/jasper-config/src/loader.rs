//! Configuration loading from YAML/TOML files with environment overrides.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use jasper_common::{JasperError, Result as JasperResult};
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable pointing at a configuration file.
pub const CONFIG_PATH_ENV: &str = "JASPER_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Unknown configuration file extension
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Name of the offending variable
        var: String,
        /// Parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigError> for JasperError {
    fn from(err: ConfigError) -> Self {
        JasperError::config_with_source("failed to load configuration", err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML or TOML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);

        let mut config = Self::parse_file(path)?;
        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::check(&config).map_err(ConfigError::ValidationError)?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the usual places, falling back to defaults
    pub fn load() -> JasperResult<Config> {
        let config = if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            Self::load_config(&config_path)?
        } else if Path::new("jasper.yaml").exists() {
            Self::load_config("jasper.yaml")?
        } else if Path::new("jasper.yml").exists() {
            Self::load_config("jasper.yml")?
        } else if Path::new("jasper.toml").exists() {
            Self::load_config("jasper.toml")?
        } else {
            debug!("No configuration file found, using defaults");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            ConfigValidator::check(&config).map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> JasperResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Parse a configuration file, choosing the format from its extension
    pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "toml" => Ok(toml::from_str(&content)?),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`, keyed by environment variable name
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(prefix) = lookup("JASPER_TEMP_DIR_PREFIX") {
            config.resolver.temp_dir_prefix = prefix;
        }

        if let Some(grouping) = lookup("JASPER_GROUPING") {
            config.resolver.grouping = parse_var("JASPER_GROUPING", &grouping)?;
        }

        if let Some(suffix) = lookup("JASPER_LANGUAGE_SUFFIX") {
            config.resolver.language_suffix = parse_var("JASPER_LANGUAGE_SUFFIX", &suffix)?;
        }

        if let Some(encoding) = lookup("JASPER_PROPERTIES_ENCODING") {
            config.properties.encoding = parse_var("JASPER_PROPERTIES_ENCODING", &encoding)?;
        }

        if let Some(unlink) = lookup("JASPER_UNLINK") {
            config.storage.unlink_temporary_files = parse_var("JASPER_UNLINK", &unlink)?;
        }

        if let Some(host) = lookup("JASPER_DB_HOST") {
            config.database.host = Some(host);
        }

        if let Some(port) = lookup("JASPER_DB_PORT") {
            config.database.port = Some(parse_var("JASPER_DB_PORT", &port)?);
        }

        if let Some(name) = lookup("JASPER_DB_NAME") {
            config.database.name = name;
        }

        if let Some(user) = lookup("JASPER_DB_USER") {
            config.database.user = Some(user);
        }

        if let Some(password) = lookup("JASPER_DB_PASSWORD") {
            config.database.password = Some(password);
        }

        if let Some(level) = lookup("JASPER_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("JASPER_LOG_FORMAT") {
            config.logging.format = parse_var("JASPER_LOG_FORMAT", &format)?;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
