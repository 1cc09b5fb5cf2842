//! Driver variant registry and selection
//!
//! A capability is backed by one of several mutually exclusive kernel
//! drivers. Detection walks the candidates in priority order and binds the
//! first one whose control file is writable. Existence alone is not enough:
//! a read-only node means the driver is present but not usable.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::fileio::FileIo;

/// Which of the two driver variants of a capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantTag {
    Primary,
    Secondary,
}

impl fmt::Display for VariantTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantTag::Primary => write!(f, "primary"),
            VariantTag::Secondary => write!(f, "secondary"),
        }
    }
}

/// Detection state of a provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveVariant {
    #[default]
    Undetected,
    Bound(VariantTag),
}

impl ActiveVariant {
    pub fn tag(self) -> Option<VariantTag> {
        match self {
            ActiveVariant::Bound(tag) => Some(tag),
            ActiveVariant::Undetected => None,
        }
    }

    pub fn is_bound(self) -> bool {
        matches!(self, ActiveVariant::Bound(_))
    }
}

/// One entry of the probe list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateVariant {
    pub tag: VariantTag,
    pub driver: &'static str,
    /// Path whose writability decides whether this variant is present
    pub path: &'static str,
}

impl CandidateVariant {
    pub const fn new(tag: VariantTag, driver: &'static str, path: &'static str) -> Self {
        Self { tag, driver, path }
    }
}

/// Return the first writable candidate, in the order given
pub fn select_variant<'a, F>(
    files: &F,
    candidates: &'a [CandidateVariant],
) -> Option<&'a CandidateVariant>
where
    F: FileIo + ?Sized,
{
    candidates.iter().find(|candidate| {
        let writable = files.is_writable(Path::new(candidate.path));
        debug!(
            driver = candidate.driver,
            path = candidate.path,
            writable,
            "Probing driver variant"
        );
        writable
    })
}
