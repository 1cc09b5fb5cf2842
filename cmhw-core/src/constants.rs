//! Constants for cmhw
//!
//! Centralizes the sysfs paths and value ranges of every supported driver
//! variant. These are device-specific and compiled in; the range/path tables
//! in [`crate::range`] are built from them.

/// Filesystem paths
pub mod paths {
    /// Root that every compiled-in sysfs path is resolved beneath.
    pub const DEFAULT_SYSFS_ROOT: &str = "/";

    /// Framebuffer RGB gain control
    pub const COLOR_RGB: &str = "/sys/class/graphics/fb0/rgb";

    /// Framebuffer kcal gain control
    pub const COLOR_KCAL: &str = "/sys/class/graphics/fb0/kcal";

    /// Immersion TouchSense (tspdrv) drive level
    pub const VIBRATOR_TSPDRV: &str = "/sys/devices/platform/tspdrv/nforce_timed";

    /// Qualcomm PMIC (qpnp) timed-output voltage level
    pub const VIBRATOR_QPNP: &str = "/sys/devices/virtual/timed_output/vibrator/vtg_level";
}

/// Display color calibration ranges
///
/// The default value of both variants is full scale, so there is no
/// separate default constant here.
pub mod color {
    pub const CAPABILITY: &str = "display color calibration";

    pub const RGB_DRIVER: &str = "rgb";
    pub const RGB_MIN: i32 = 255;
    pub const RGB_MAX: i32 = 32768;

    pub const KCAL_DRIVER: &str = "kcal";
    pub const KCAL_MIN: i32 = 35;
    pub const KCAL_MAX: i32 = 255;
}

/// Vibrator intensity ranges
pub mod vibrator {
    pub const CAPABILITY: &str = "vibrator intensity";

    pub const TSPDRV_DRIVER: &str = "tspdrv";
    pub const TSPDRV_MIN: i32 = 1;
    pub const TSPDRV_MAX: i32 = 127;
    pub const TSPDRV_DEFAULT: i32 = 65;
    pub const TSPDRV_WARNING: i32 = 90;

    pub const QPNP_DRIVER: &str = "qpnp";
    pub const QPNP_MIN: i32 = 12;
    pub const QPNP_MAX: i32 = 31;
    pub const QPNP_DEFAULT: i32 = 28;

    /// Returned by the warning threshold query when the variant has none
    pub const WARNING_NOT_APPLICABLE: i32 = -1;
}
