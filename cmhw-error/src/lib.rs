//! Unified error handling for cmhw
//!
//! This crate provides a single error type used across all cmhw components.
//! It uses thiserror for ergonomic error definitions with proper Display and Error trait impls.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Result type alias using CmhwError
pub type Result<T> = std::result::Result<T, CmhwError>;

/// Unified error type for all cmhw operations
#[derive(thiserror::Error, Debug)]
pub enum CmhwError {
    // ============================================================================
    // I/O and File System Errors
    // ============================================================================
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: io::Error,
    },

    // ============================================================================
    // Driver Value Errors
    // ============================================================================
    #[error("Failed to parse '{content}' from {path}: {source}")]
    ParseValue {
        path: PathBuf,
        content: String,
        source: ParseIntError,
    },

    // ============================================================================
    // Capability Errors
    // ============================================================================
    #[error("{capability} queried before a driver variant was detected")]
    NotDetected {
        capability: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl CmhwError {
    /// Create a config error from a string
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a query-before-detection error for a capability
    pub fn not_detected(capability: impl Into<String>) -> Self {
        Self::NotDetected {
            capability: capability.into(),
        }
    }

    /// Whether this error means no driver variant is bound
    pub fn is_not_detected(&self) -> bool {
        matches!(self, Self::NotDetected { .. })
    }
}
