//! Shared, hot-swappable configuration.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use arc_swap::ArcSwap;
use jasper_common::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Configuration shared between the resolver, the executor and the CLI.
///
/// Readers take cheap snapshots; a replacement is validated before it
/// becomes visible, so readers never observe an invalid configuration.
#[derive(Debug)]
pub struct ConfigCache {
    current: ArcSwap<Config>,
}

impl ConfigCache {
    /// Wraps an already validated configuration.
    pub fn new(config: Config) -> Self {
        Self {
            current: ArcSwap::from_pointee(config),
        }
    }

    /// The configuration in effect right now.
    pub fn snapshot(&self) -> Arc<Config> {
        self.current.load_full()
    }

    /// Validates `config` and makes it current, returning the one it replaced.
    pub fn replace(&self, config: Config) -> Result<Arc<Config>> {
        ConfigValidator::validate(&config)?;
        let previous = self.current.swap(Arc::new(config));
        info!("Configuration replaced");
        Ok(previous)
    }

    /// Applies `edit` to a copy of the current configuration and swaps it in.
    ///
    /// `edit` may run more than once under contention. An edit producing an
    /// invalid configuration is rejected and nothing changes.
    pub fn modify<F>(&self, edit: F) -> Result<()>
    where
        F: Fn(&mut Config),
    {
        let mut candidate = Config::clone(&self.current.load());
        edit(&mut candidate);
        ConfigValidator::validate(&candidate)?;

        self.current.rcu(|current| {
            let mut next = Config::clone(current);
            edit(&mut next);
            next
        });
        debug!("Configuration modified");
        Ok(())
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jasper_common::PropertiesEncoding;

    #[test]
    fn test_modify_switches_encoding() {
        let cache = ConfigCache::default();
        cache
            .modify(|c| c.properties.encoding = PropertiesEncoding::Latin1)
            .unwrap();
        assert_eq!(cache.snapshot().properties.encoding, PropertiesEncoding::Latin1);
    }

    #[test]
    fn test_invalid_modification_is_rejected() {
        let cache = ConfigCache::default();
        assert!(cache.modify(|c| c.resolver.temp_dir_prefix.clear()).is_err());
        assert_eq!(cache.snapshot().resolver.temp_dir_prefix, "jasper-bridge-");
    }
}
