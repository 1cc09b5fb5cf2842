//! Line-oriented sysfs file access
//!
//! Providers never touch the filesystem directly; every probe, read and write
//! goes through a [`FileIo`] implementation so that detection and value I/O
//! can be exercised against fakes.
//!
//! Each call is an independent open/read-or-write/close cycle. Nothing is
//! cached and no handle outlives the call.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::constants::paths;
use crate::error::{CmhwError, Result};

/// File utility surface used by the capability providers
#[cfg_attr(test, mockall::automock)]
pub trait FileIo: Send + Sync {
    /// Whether `path` can currently be opened for writing.
    ///
    /// Must return `false` (not fail) for a path that does not exist.
    fn is_writable(&self, path: &Path) -> bool;

    /// Read the first line of `path` without its trailing newline
    fn read_line(&self, path: &Path) -> Result<String>;

    /// Overwrite `path` with `content`
    fn write_line(&self, path: &Path, content: &str) -> Result<()>;
}

/// [`FileIo`] over the real filesystem
///
/// Absolute paths are resolved beneath `root`, which is `/` unless the
/// device tree is mounted somewhere else.
#[derive(Debug, Clone)]
pub struct SysfsFiles {
    root: PathBuf,
}

impl Default for SysfsFiles {
    fn default() -> Self {
        Self::new(paths::DEFAULT_SYSFS_ROOT)
    }
}

impl SysfsFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a compiled-in path onto the configured root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("/") {
            Ok(relative) => self.root.join(relative),
            Err(_) => self.root.join(path),
        }
    }
}

impl FileIo for SysfsFiles {
    fn is_writable(&self, path: &Path) -> bool {
        let resolved = self.resolve(path);
        let writable = OpenOptions::new().write(true).open(&resolved).is_ok();
        trace!(path = %resolved.display(), writable, "Probed writability");
        writable
    }

    fn read_line(&self, path: &Path) -> Result<String> {
        let resolved = self.resolve(path);
        let content = fs::read_to_string(&resolved).map_err(|source| CmhwError::FileRead {
            path: resolved.clone(),
            source,
        })?;

        Ok(content.lines().next().unwrap_or_default().to_string())
    }

    fn write_line(&self, path: &Path, content: &str) -> Result<()> {
        let resolved = self.resolve(path);
        fs::write(&resolved, content).map_err(|source| CmhwError::FileWrite {
            path: resolved.clone(),
            source,
        })
    }
}
