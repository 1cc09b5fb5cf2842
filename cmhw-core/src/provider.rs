//! Generic capability provider
//!
//! A [`CapabilityProvider`] owns one [`DeviceTable`], the injected file
//! collaborator and the detected variant. Detection binds a variant once;
//! from then on every range query and every read or write uses that
//! variant's path and constants.
//!
//! State machine:
//!
//! ```text
//! Undetected --detect() ok--> Bound(tag)   (terminal)
//! Undetected --detect() none--> Undetected (probed again on next detect())
//! ```

use std::path::Path;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::error::{CmhwError, Result};
use crate::fileio::FileIo;
use crate::range::{DeviceTable, UndetectedPolicy, VariantSpec};
use crate::variant::{select_variant, ActiveVariant, VariantTag};

pub struct CapabilityProvider<F: FileIo> {
    table: DeviceTable,
    files: F,
    policy: UndetectedPolicy,
    active: RwLock<ActiveVariant>,
}

impl<F: FileIo> CapabilityProvider<F> {
    pub fn new(table: DeviceTable, files: F) -> Self {
        Self::with_policy(table, files, UndetectedPolicy::default())
    }

    pub fn with_policy(table: DeviceTable, files: F, policy: UndetectedPolicy) -> Self {
        Self {
            table,
            files,
            policy,
            active: RwLock::new(ActiveVariant::Undetected),
        }
    }

    pub fn table(&self) -> &DeviceTable {
        &self.table
    }

    pub fn files(&self) -> &F {
        &self.files
    }

    pub fn capability(&self) -> &'static str {
        self.table.capability
    }

    /// Probe the driver variants and bind the first writable one.
    ///
    /// Returns `true` if a variant is bound. Once bound, later calls return
    /// `true` without probing again.
    pub fn detect(&self) -> bool {
        if self.active.read().is_bound() {
            return true;
        }

        let candidates = self.table.candidates();
        let Some(selected) = select_variant(&self.files, &candidates) else {
            debug!(capability = self.table.capability, "No writable driver variant");
            return false;
        };

        let mut active = self.active.write();
        // Another thread may have bound first
        if !active.is_bound() {
            *active = ActiveVariant::Bound(selected.tag);
            info!(
                capability = self.table.capability,
                driver = selected.driver,
                path = selected.path,
                "Bound driver variant"
            );
        }
        true
    }

    pub fn is_detected(&self) -> bool {
        self.active.read().is_bound()
    }

    pub fn active_variant(&self) -> ActiveVariant {
        *self.active.read()
    }

    /// Variant that queries use, after applying the undetected policy
    fn query_tag(&self) -> Result<VariantTag> {
        self.policy
            .resolve(self.active_variant())
            .ok_or_else(|| CmhwError::not_detected(self.table.capability))
    }

    /// Path and range of the variant queries are answered from
    pub fn active_spec(&self) -> Result<&VariantSpec> {
        let tag = self.query_tag()?;
        Ok(self.table.spec(tag))
    }

    pub fn path(&self) -> Result<&'static str> {
        Ok(self.active_spec()?.path)
    }

    pub fn max_value(&self) -> Result<i32> {
        Ok(self.active_spec()?.range.max)
    }

    pub fn min_value(&self) -> Result<i32> {
        Ok(self.active_spec()?.range.min)
    }

    pub fn default_value(&self) -> Result<i32> {
        Ok(self.active_spec()?.range.default_value())
    }

    /// `None` when the active variant has no warning threshold
    pub fn warning_threshold(&self) -> Result<Option<i32>> {
        Ok(self.active_spec()?.range.warning_threshold)
    }

    /// Read the control file's current line, unmodified
    pub fn read_raw(&self) -> Result<String> {
        let path = self.path()?;
        self.files.read_line(Path::new(path))
    }

    /// Write `content` to the control file as a single line
    pub fn write_raw(&self, content: &str) -> Result<()> {
        let path = self.path()?;
        debug!(capability = self.table.capability, path, content, "Writing driver value");
        self.files.write_line(Path::new(path), content)
    }
}
