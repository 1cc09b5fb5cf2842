//! Error types re-exported from `cmhw-error`

pub use cmhw_error::{CmhwError, Result};
