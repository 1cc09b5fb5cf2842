/*
 * This file is part of cmhw.
 *
 * Copyright (C) 2025 cmhw contributors
 *
 * cmhw is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * cmhw is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with cmhw. If not, see <https://www.gnu.org/licenses/>.
 */

use std::sync::Arc;

use cmhw_core::{
    reports_to_json, CapabilityReport, ColorCalibration, ProviderConfig, Result, SysfsFiles,
    VibratorIntensity,
};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use tracing::info;

lazy_static! {
    static ref PLATFORM: RwLock<Arc<Platform>> =
        RwLock::new(Arc::new(Platform::new(&ProviderConfig::default())));
}

/// Both capability providers over the real sysfs
pub struct Platform {
    pub color: ColorCalibration<SysfsFiles>,
    pub vibrator: VibratorIntensity<SysfsFiles>,
}

impl Platform {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            color: ColorCalibration::with_policy(config.files(), config.undetected_policy),
            vibrator: VibratorIntensity::with_policy(config.files(), config.undetected_policy),
        }
    }

    /// Run detection for every capability
    pub fn detect_all(&self) -> bool {
        let color = self.color.is_supported();
        let vibrator = self.vibrator.is_supported();
        color || vibrator
    }

    pub fn reports(&self) -> Vec<CapabilityReport> {
        vec![self.color.report(), self.vibrator.report()]
    }

    pub fn reports_json(&self) -> Result<String> {
        reports_to_json(&self.reports())
    }
}

/// The process-wide platform
pub fn platform() -> Arc<Platform> {
    Arc::clone(&PLATFORM.read())
}

/// Replace the process-wide platform.
///
/// Detection state starts over; callers holding the previous
/// [`Arc<Platform>`] keep using it.
pub fn configure(config: &ProviderConfig) {
    info!(
        sysfs_root = %config.sysfs_root.display(),
        policy = ?config.undetected_policy,
        "Configuring platform"
    );
    *PLATFORM.write() = Arc::new(Platform::new(config));
}
