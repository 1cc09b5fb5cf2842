//! Vibrator intensity
//!
//! Controls the motor drive level through either the TouchSense `tspdrv`
//! node or the Qualcomm `qpnp` timed-output node. Values are decimal
//! integers. Intensities are written as given; callers check the range
//! first.

use std::path::PathBuf;

use crate::constants::vibrator::WARNING_NOT_APPLICABLE;
use crate::error::{CmhwError, Result};
use crate::fileio::FileIo;
use crate::provider::CapabilityProvider;
use crate::range::{DeviceTable, UndetectedPolicy};
use crate::report::{capture_report, CapabilityReport};

pub struct VibratorIntensity<F: FileIo> {
    provider: CapabilityProvider<F>,
}

impl<F: FileIo> VibratorIntensity<F> {
    pub fn new(files: F) -> Self {
        Self::with_policy(files, UndetectedPolicy::default())
    }

    pub fn with_policy(files: F, policy: UndetectedPolicy) -> Self {
        Self {
            provider: CapabilityProvider::with_policy(
                DeviceTable::vibrator_intensity(),
                files,
                policy,
            ),
        }
    }

    pub fn provider(&self) -> &CapabilityProvider<F> {
        &self.provider
    }

    /// Detect the vibrator driver
    pub fn is_supported(&self) -> bool {
        self.provider.detect()
    }

    pub fn max_intensity(&self) -> Result<i32> {
        self.provider.max_value()
    }

    pub fn min_intensity(&self) -> Result<i32> {
        self.provider.min_value()
    }

    pub fn default_intensity(&self) -> Result<i32> {
        self.provider.default_value()
    }

    /// Intensity above which the vibration is uncomfortably strong, or
    /// `-1` if the driver has no such threshold
    pub fn warning_threshold(&self) -> Result<i32> {
        Ok(self
            .provider
            .warning_threshold()?
            .unwrap_or(WARNING_NOT_APPLICABLE))
    }

    pub fn cur_intensity(&self) -> Result<i32> {
        let path = self.provider.path()?;
        let content = self.provider.read_raw()?;
        let trimmed = content.trim();
        trimmed.parse::<i32>().map_err(|source| CmhwError::ParseValue {
            path: PathBuf::from(path),
            content: trimmed.to_string(),
            source,
        })
    }

    pub fn set_intensity(&self, intensity: i32) -> Result<()> {
        self.provider.write_raw(&intensity.to_string())
    }

    pub fn report(&self) -> CapabilityReport {
        capture_report(&self.provider)
    }
}
