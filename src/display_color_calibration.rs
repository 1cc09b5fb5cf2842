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

//! Display color calibration through the process-wide [`Platform`](crate::Platform)
//!
//! Call [`is_supported`] before anything else; range and value queries made
//! before a successful detection fail with [`CmhwError::NotDetected`](crate::CmhwError)
//! unless the platform was configured with the secondary fallback policy.

use tracing::debug;

use crate::platform::platform;
use crate::Result;

pub fn is_supported() -> bool {
    platform().color.is_supported()
}

pub fn get_max_value() -> Result<i32> {
    platform().color.max_value()
}

pub fn get_min_value() -> Result<i32> {
    platform().color.min_value()
}

pub fn get_def_value() -> Result<i32> {
    platform().color.def_value()
}

pub fn get_cur_colors() -> Result<String> {
    platform().color.cur_colors()
}

/// Write `colors` to the detected driver; `false` if the write failed
pub fn set_colors(colors: &str) -> bool {
    match platform().color.set_colors(colors) {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to set display colors '{}': {}", colors, e);
            false
        }
    }
}
