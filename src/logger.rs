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

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Install a stdout `tracing` subscriber filtered at `level`.
///
/// `level` uses `EnvFilter` directive syntax (e.g. `"debug"` or
/// `"cmhw_core=trace"`); an invalid directive falls back to `info`.
/// Calling this again once a subscriber is installed does nothing.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("Invalid log level '{}': {}, using {}", level, e, DEFAULT_LOG_LEVEL);
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    });

    // Fails only when a global subscriber already exists
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(filter)
        .try_init();
}
