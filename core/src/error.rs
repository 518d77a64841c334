//! Core error types and utilities
//!
//! These cover the fallible outer surface of the engine: configuration
//! loading and validation. Probe failures are deliberately not represented
//! here; they are translated into `CheckResult` values at the probe boundary
//! and never propagate as errors.

use thiserror::Error;

/// Core-specific error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Initialization error: {0}")]
    InitializationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CoreError {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::ConfigurationError(_) => "VNT001",
            CoreError::ValidationError(_) => "VNT002",
            CoreError::InitializationError(_) => "VNT003",
            CoreError::IoError(_) => "VNT004",
            CoreError::TomlError(_) => "VNT005",
        }
    }
}

/// Core-specific result type
pub type Result<T> = std::result::Result<T, CoreError>;
