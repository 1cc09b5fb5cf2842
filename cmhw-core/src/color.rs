//! Display color calibration
//!
//! Controls the framebuffer RGB gain through either the `rgb` node or the
//! `kcal` node. The color string is written and returned as-is; its format
//! (usually three space or comma separated gains) belongs to the caller.

use crate::error::Result;
use crate::fileio::FileIo;
use crate::provider::CapabilityProvider;
use crate::range::{DeviceTable, UndetectedPolicy};
use crate::report::{capture_report, CapabilityReport};

pub struct ColorCalibration<F: FileIo> {
    provider: CapabilityProvider<F>,
}

impl<F: FileIo> ColorCalibration<F> {
    pub fn new(files: F) -> Self {
        Self::with_policy(files, UndetectedPolicy::default())
    }

    pub fn with_policy(files: F, policy: UndetectedPolicy) -> Self {
        Self {
            provider: CapabilityProvider::with_policy(
                DeviceTable::color_calibration(),
                files,
                policy,
            ),
        }
    }

    pub fn provider(&self) -> &CapabilityProvider<F> {
        &self.provider
    }

    /// Detect the color calibration driver
    pub fn is_supported(&self) -> bool {
        self.provider.detect()
    }

    pub fn max_value(&self) -> Result<i32> {
        self.provider.max_value()
    }

    pub fn min_value(&self) -> Result<i32> {
        self.provider.min_value()
    }

    /// Full scale is the default gain, so this always equals [`Self::max_value`]
    pub fn def_value(&self) -> Result<i32> {
        self.max_value()
    }

    pub fn cur_colors(&self) -> Result<String> {
        self.provider.read_raw()
    }

    pub fn set_colors(&self, colors: &str) -> Result<()> {
        self.provider.write_raw(colors)
    }

    pub fn report(&self) -> CapabilityReport {
        capture_report(&self.provider)
    }
}
