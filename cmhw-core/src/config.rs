//! Provider configuration
//!
//! Optional JSON file, e.g.
//!
//! ```json
//! { "sysfs_root": "/", "undetected_policy": "strict" }
//! ```
//!
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::paths;
use crate::error::{CmhwError, Result};
use crate::fileio::SysfsFiles;
use crate::range::UndetectedPolicy;

/// Maximum accepted configuration file size
const MAX_CONFIG_SIZE: u64 = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Directory the compiled-in sysfs paths are resolved beneath
    #[serde(default = "default_sysfs_root")]
    pub sysfs_root: PathBuf,

    /// Behavior of queries made before a driver variant is detected
    #[serde(default)]
    pub undetected_policy: UndetectedPolicy,
}

fn default_sysfs_root() -> PathBuf {
    PathBuf::from(paths::DEFAULT_SYSFS_ROOT)
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            sysfs_root: default_sysfs_root(),
            undetected_policy: UndetectedPolicy::default(),
        }
    }
}

impl ProviderConfig {
    /// File collaborator rooted at `sysfs_root`
    pub fn files(&self) -> SysfsFiles {
        SysfsFiles::new(&self.sysfs_root)
    }
}

/// Load a configuration file
pub fn load_config(path: &Path) -> Result<ProviderConfig> {
    let metadata = fs::metadata(path).map_err(|source| CmhwError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(CmhwError::config(format!(
            "{} is too large ({} bytes, max {})",
            path.display(),
            metadata.len(),
            MAX_CONFIG_SIZE
        )));
    }

    let content = fs::read_to_string(path).map_err(|source| CmhwError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ProviderConfig = serde_json::from_str(&content)?;

    if config.sysfs_root.as_os_str().is_empty() {
        return Err(CmhwError::config("sysfs_root must not be empty"));
    }
    Ok(config)
}
