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

//! cmhw - hardware capability shim for Linux sysfs drivers
//!
//! Answers "is display color calibration supported?" and "is vibrator
//! intensity control supported?" without the caller knowing which vendor
//! driver is underneath, and reads or writes the value through whichever
//! driver was detected.
//!
//! The flat functions in [`display_color_calibration`] and [`vibrator`] use a
//! process-wide [`Platform`]. Build a [`Platform`] directly for isolated use.

pub mod display_color_calibration;
pub mod logger;
pub mod platform;
pub mod vibrator;

pub use cmhw_core::{load_config, CapabilityReport, ProviderConfig, UndetectedPolicy};
pub use cmhw_error::{CmhwError, Result};
pub use platform::{configure, platform, Platform};
