//! cmhw Core Library
//!
//! Detects which of several mutually exclusive sysfs driver interfaces backs
//! a hardware capability, and reads or writes its value through that
//! interface.
//!
//! # Capabilities
//!
//! - **Display color calibration**: framebuffer `rgb` or `kcal` gain
//! - **Vibrator intensity**: `tspdrv` or `qpnp` drive level
//!
//! # Module Structure
//!
//! - `variant` - candidate list and first-writable selection
//! - `range` - per-variant path and value range tables
//! - `provider` - generic provider tying detection, ranges and I/O together
//! - `color`, `vibrator` - the two concrete providers
//! - `fileio` - the file collaborator seam and its sysfs implementation
//!
//! # Example
//!
//! ```no_run
//! use cmhw_core::{SysfsFiles, VibratorIntensity};
//!
//! let vibrator = VibratorIntensity::new(SysfsFiles::default());
//! if vibrator.is_supported() {
//!     let level = vibrator.default_intensity().unwrap();
//!     vibrator.set_intensity(level).unwrap();
//! }
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod fileio;
pub mod provider;
pub mod range;
pub mod report;
pub mod variant;
pub mod vibrator;

pub use color::ColorCalibration;
pub use config::{load_config, ProviderConfig};
pub use error::{CmhwError, Result};
pub use fileio::{FileIo, SysfsFiles};
pub use provider::CapabilityProvider;
pub use range::{DefaultValue, DeviceTable, RangeSpec, UndetectedPolicy, VariantSpec};
pub use report::{capture_report, reports_to_json, CapabilityReport};
pub use variant::{select_variant, ActiveVariant, CandidateVariant, VariantTag};
pub use vibrator::VibratorIntensity;
