//! Temporary input files staged for a single report run.

use jasper_common::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Tracks temporary files and removes them when the run ends.
///
/// Files are removed on [`TemporaryFiles::cleanup`] or on drop, unless
/// unlinking is disabled, in which case they are kept for inspection.
#[derive(Debug)]
pub struct TemporaryFiles {
    paths: Vec<PathBuf>,
    unlink: bool,
}

impl TemporaryFiles {
    /// Creates an empty set.
    pub const fn new(unlink: bool) -> Self {
        Self {
            paths: Vec::new(),
            unlink,
        }
    }

    /// Creates an empty temporary file and tracks it.
    pub fn create(&mut self, prefix: &str, suffix: &str) -> Result<PathBuf> {
        let (_, path) = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(suffix)
            .tempfile()?
            .keep()
            .map_err(io::Error::from)?;
        debug!(path = %path.display(), "Staged temporary file");
        self.paths.push(path.clone());
        Ok(path)
    }

    /// Tracked files.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Removes every tracked file and forgets it.
    ///
    /// Removal failures are logged and otherwise ignored. Returns the number
    /// of files removed.
    pub fn cleanup(&mut self) -> usize {
        if self.paths.is_empty() {
            return 0;
        }
        if !self.unlink {
            for path in self.paths.drain(..) {
                info!(path = %path.display(), "Keeping temporary file");
            }
            return 0;
        }

        let mut removed = 0;
        for path in self.paths.drain(..) {
            match remove(&path) {
                Ok(()) => removed += 1,
                Err(e) => warn!(path = %path.display(), error = %e, "Could not remove temporary file"),
            }
        }
        removed
    }
}

fn remove(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

impl Drop for TemporaryFiles {
    fn drop(&mut self) {
        self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_cleanup() {
        let mut files = TemporaryFiles::new(true);
        let data = files.create("jasper-test-", ".csv").unwrap();
        let output = files.create("jasper-test-", ".pdf").unwrap();

        assert!(data.exists());
        assert!(output.exists());
        assert!(data.to_string_lossy().ends_with(".csv"));

        assert_eq!(files.cleanup(), 2);
        assert!(!data.exists());
        assert!(!output.exists());
        assert!(files.paths().is_empty());
    }

    #[test]
    fn test_drop_removes_files() {
        let path = {
            let mut files = TemporaryFiles::new(true);
            files.create("jasper-test-", ".csv").unwrap()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_keep_when_unlink_disabled() {
        let mut files = TemporaryFiles::new(false);
        let path = files.create("jasper-test-", ".csv").unwrap();
        assert_eq!(files.cleanup(), 0);
        drop(files);
        assert!(path.exists());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_already_removed_counts() {
        let mut files = TemporaryFiles::new(true);
        let path = files.create("jasper-test-", ".csv").unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(files.cleanup(), 1);
    }
}
