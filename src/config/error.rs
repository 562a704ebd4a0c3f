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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host address")]
    InvalidHost,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Model API base URL must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("max_tokens must be between 1 and {max}")]
    InvalidMaxTokens { max: u32 },

    #[error("temperature must be between 0.0 and 1.0")]
    InvalidTemperature,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}
