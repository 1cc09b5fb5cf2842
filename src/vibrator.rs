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

//! Vibrator intensity through the process-wide [`Platform`](crate::Platform)

use tracing::debug;

use crate::platform::platform;
use crate::Result;

pub fn is_supported() -> bool {
    platform().vibrator.is_supported()
}

pub fn get_max_intensity() -> Result<i32> {
    platform().vibrator.max_intensity()
}

pub fn get_min_intensity() -> Result<i32> {
    platform().vibrator.min_intensity()
}

pub fn get_default_intensity() -> Result<i32> {
    platform().vibrator.default_intensity()
}

/// `-1` when the detected driver has no warning threshold
pub fn get_warning_threshold() -> Result<i32> {
    platform().vibrator.warning_threshold()
}

pub fn get_cur_intensity() -> Result<i32> {
    platform().vibrator.cur_intensity()
}

/// Write `intensity` to the detected driver; `false` if the write failed
pub fn set_intensity(intensity: i32) -> bool {
    match platform().vibrator.set_intensity(intensity) {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to set vibrator intensity {}: {}", intensity, e);
            false
        }
    }
}
