//! Memoization of resolved template paths.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Maps report names to the template path they resolved to.
///
/// Entries never expire on their own; `remove` and `clear` are the only
/// ways to invalidate them.
pub trait ReportCache: Send + Sync + fmt::Debug {
    /// Cached path for `report_name`.
    fn get(&self, report_name: &str) -> Option<PathBuf>;

    /// Stores `path` for `report_name`, replacing any previous entry.
    fn set(&self, report_name: &str, path: PathBuf);

    /// Evicts one entry, returning its path.
    fn remove(&self, report_name: &str) -> Option<PathBuf>;

    /// Evicts every entry.
    fn clear(&self);
}

/// Unbounded in-memory [`ReportCache`].
#[derive(Debug, Default)]
pub struct MemoryReportCache {
    entries: RwLock<HashMap<String, PathBuf>>,
}

impl MemoryReportCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached reports.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl ReportCache for MemoryReportCache {
    fn get(&self, report_name: &str) -> Option<PathBuf> {
        self.entries.read().get(report_name).cloned()
    }

    fn set(&self, report_name: &str, path: PathBuf) {
        self.entries.write().insert(report_name.to_string(), path);
    }

    fn remove(&self, report_name: &str) -> Option<PathBuf> {
        self.entries.write().remove(report_name)
    }

    fn clear(&self) {
        let mut entries = self.entries.write();
        debug!(count = entries.len(), "Clearing report cache");
        entries.clear();
    }
}

impl fmt::Display for MemoryReportCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryReportCache({} entries)", self.len())
    }
}
