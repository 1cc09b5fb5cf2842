//! Range/path tables
//!
//! Every capability has exactly two driver variants. A [`DeviceTable`] maps
//! each [`VariantTag`] to the sysfs path and value range that belong to it,
//! so a provider never mixes the constants of one variant with the file of
//! another.

use serde::{Deserialize, Serialize};

use crate::constants::{color, paths, vibrator};
use crate::variant::{ActiveVariant, CandidateVariant, VariantTag};

/// How the default value of a variant is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Default is the variant's maximum
    FullScale,
    /// Default is an independently tuned constant
    Fixed(i32),
}

/// Value range of one driver variant
///
/// `default` is not required to lie inside `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub min: i32,
    pub max: i32,
    pub default: DefaultValue,
    pub warning_threshold: Option<i32>,
}

impl RangeSpec {
    pub fn default_value(&self) -> i32 {
        match self.default {
            DefaultValue::FullScale => self.max,
            DefaultValue::Fixed(value) => value,
        }
    }
}

/// File path and range of one driver variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    /// Short driver name, used in logs and reports
    pub driver: &'static str,
    /// Absolute sysfs path of the control file
    pub path: &'static str,
    pub range: RangeSpec,
}

/// Per-capability table of the two driver variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceTable {
    pub capability: &'static str,
    pub primary: VariantSpec,
    pub secondary: VariantSpec,
}

impl DeviceTable {
    pub fn spec(&self, tag: VariantTag) -> &VariantSpec {
        match tag {
            VariantTag::Primary => &self.primary,
            VariantTag::Secondary => &self.secondary,
        }
    }

    /// Candidates in probe priority order
    pub fn candidates(&self) -> [CandidateVariant; 2] {
        [
            CandidateVariant::new(VariantTag::Primary, self.primary.driver, self.primary.path),
            CandidateVariant::new(
                VariantTag::Secondary,
                self.secondary.driver,
                self.secondary.path,
            ),
        ]
    }

    /// Display color calibration: framebuffer `rgb` first, then `kcal`
    pub fn color_calibration() -> Self {
        Self {
            capability: color::CAPABILITY,
            primary: VariantSpec {
                driver: color::RGB_DRIVER,
                path: paths::COLOR_RGB,
                range: RangeSpec {
                    min: color::RGB_MIN,
                    max: color::RGB_MAX,
                    default: DefaultValue::FullScale,
                    warning_threshold: None,
                },
            },
            secondary: VariantSpec {
                driver: color::KCAL_DRIVER,
                path: paths::COLOR_KCAL,
                range: RangeSpec {
                    min: color::KCAL_MIN,
                    max: color::KCAL_MAX,
                    default: DefaultValue::FullScale,
                    warning_threshold: None,
                },
            },
        }
    }

    /// Vibrator intensity: `tspdrv` first, then `qpnp`
    pub fn vibrator_intensity() -> Self {
        Self {
            capability: vibrator::CAPABILITY,
            primary: VariantSpec {
                driver: vibrator::TSPDRV_DRIVER,
                path: paths::VIBRATOR_TSPDRV,
                range: RangeSpec {
                    min: vibrator::TSPDRV_MIN,
                    max: vibrator::TSPDRV_MAX,
                    default: DefaultValue::Fixed(vibrator::TSPDRV_DEFAULT),
                    warning_threshold: Some(vibrator::TSPDRV_WARNING),
                },
            },
            secondary: VariantSpec {
                driver: vibrator::QPNP_DRIVER,
                path: paths::VIBRATOR_QPNP,
                range: RangeSpec {
                    min: vibrator::QPNP_MIN,
                    max: vibrator::QPNP_MAX,
                    default: DefaultValue::Fixed(vibrator::QPNP_DEFAULT),
                    warning_threshold: None,
                },
            },
        }
    }
}

/// What range and I/O queries do while no variant is bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndetectedPolicy {
    /// Report [`crate::CmhwError::NotDetected`]
    #[default]
    Strict,
    /// Answer with the secondary variant, as legacy platforms expect
    SecondaryFallback,
}

impl UndetectedPolicy {
    /// Variant a query should use, or `None` if it must be refused
    pub fn resolve(self, active: ActiveVariant) -> Option<VariantTag> {
        match (active, self) {
            (ActiveVariant::Bound(tag), _) => Some(tag),
            (ActiveVariant::Undetected, UndetectedPolicy::Strict) => None,
            (ActiveVariant::Undetected, UndetectedPolicy::SecondaryFallback) => {
                Some(VariantTag::Secondary)
            }
        }
    }
}
