//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Thinking delay minimum must be below the maximum")]
    InvalidDelayRange,

    #[error("Thinking delay exceeds maximum allowed (60000 ms)")]
    DelayTooLong,

    #[error("Event channel capacity must be greater than zero")]
    InvalidEventCapacity,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
