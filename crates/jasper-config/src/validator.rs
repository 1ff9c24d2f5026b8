//! Runtime validation of loaded configuration.

use crate::schema::Config;
use jasper_common::{JasperError, Result};

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        Self::check(config).map_err(JasperError::config)
    }

    /// Validates a configuration, returning the first problem as text.
    pub fn check(config: &Config) -> std::result::Result<(), String> {
        let prefix = &config.resolver.temp_dir_prefix;
        if prefix.is_empty() {
            return Err("resolver.temp_dir_prefix cannot be empty".to_string());
        }
        if prefix.contains(['/', '\\']) {
            return Err(format!(
                "resolver.temp_dir_prefix must not contain path separators: {prefix}"
            ));
        }

        if config.resolver.catalog_namespace.trim().is_empty() {
            return Err("resolver.catalog_namespace cannot be empty".to_string());
        }

        if config.database.port == Some(0) {
            return Err("database.port must be greater than zero".to_string());
        }

        if config.logging.level.trim().is_empty() {
            return Err("logging.level cannot be empty".to_string());
        }

        Ok(())
    }
}
