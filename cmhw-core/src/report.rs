//! Capability snapshots
//!
//! Captures what a provider has detected for debugging and diagnostics.
//! Capturing never fails: a control file that cannot be read shows up as
//! a missing current value.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::fileio::FileIo;
use crate::provider::CapabilityProvider;
use crate::variant::VariantTag;

/// Detection result and value range of one capability
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityReport {
    pub capability: String,
    pub supported: bool,
    pub variant: Option<VariantTag>,
    pub driver: Option<String>,
    pub path: Option<String>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub default_value: Option<i32>,
    pub warning_threshold: Option<i32>,
    pub current_value: Option<String>,
}

/// Snapshot the bound variant of `provider`
///
/// Does not run detection. An undetected provider reports only its name.
pub fn capture_report<F: FileIo>(provider: &CapabilityProvider<F>) -> CapabilityReport {
    let capability = provider.capability().to_string();

    let Some(tag) = provider.active_variant().tag() else {
        return CapabilityReport {
            capability,
            supported: false,
            variant: None,
            driver: None,
            path: None,
            min_value: None,
            max_value: None,
            default_value: None,
            warning_threshold: None,
            current_value: None,
        };
    };

    let spec = provider.table().spec(tag);
    let current_value = match provider.read_raw() {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(capability = %capability, "Current value unavailable: {}", e);
            None
        }
    };

    CapabilityReport {
        capability,
        supported: true,
        variant: Some(tag),
        driver: Some(spec.driver.to_string()),
        path: Some(spec.path.to_string()),
        min_value: Some(spec.range.min),
        max_value: Some(spec.range.max),
        default_value: Some(spec.range.default_value()),
        warning_threshold: spec.range.warning_threshold,
        current_value,
    }
}

/// Serialize reports as pretty JSON
pub fn reports_to_json(reports: &[CapabilityReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
