//! Default values for every configuration section.

use crate::schema::*;
use jasper_common::{GroupingPolicy, LanguageSuffix, LogFormat, PropertiesEncoding};

/// Default prefix of working directories created by the resolver.
pub const DEFAULT_TEMP_DIR_PREFIX: &str = "jasper-bridge-";

/// Default namespace of subreport names.
pub const DEFAULT_CATALOG_NAMESPACE: &str = "jasper_reports";

/// Default database host.
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default database port.
pub const DEFAULT_DB_PORT: u16 = 5432;

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            properties: PropertiesConfig::default(),
            storage: StorageConfig::default(),
            database: DatabaseConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            temp_dir_prefix: DEFAULT_TEMP_DIR_PREFIX.to_string(),
            grouping: GroupingPolicy::ByLanguage,
            language_suffix: LanguageSuffix::Full,
            catalog_namespace: DEFAULT_CATALOG_NAMESPACE.to_string(),
        }
    }
}

impl Default for PropertiesConfig {
    fn default() -> Self {
        Self {
            encoding: PropertiesEncoding::Utf8,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            unlink_temporary_files: true,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            name: String::new(),
            user: None,
            password: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            file_path: None,
            span_events: false,
        }
    }
}

impl DatabaseConfig {
    /// Host, falling back to [`DEFAULT_DB_HOST`].
    pub fn host_or_default(&self) -> &str {
        self.host
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_DB_HOST)
    }

    /// Port, falling back to [`DEFAULT_DB_PORT`].
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_DB_PORT)
    }

    /// Password, empty when unset.
    pub fn password_or_default(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.resolver.temp_dir_prefix, "jasper-bridge-");
        assert_eq!(config.resolver.grouping, GroupingPolicy::ByLanguage);
        assert_eq!(config.properties.encoding, PropertiesEncoding::Utf8);
        assert!(config.storage.unlink_temporary_files);
        assert_eq!(config.database.host_or_default(), "localhost");
        assert_eq!(config.database.port_or_default(), 5432);
        assert_eq!(config.database.password_or_default(), "");
    }

    #[test]
    fn test_empty_host_falls_back() {
        let db = DatabaseConfig {
            host: Some(String::new()),
            ..DatabaseConfig::default()
        };
        assert_eq!(db.host_or_default(), "localhost");
    }
}
