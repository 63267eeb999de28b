//! Resolver setup errors
//!
//! Resolution itself fails with [`childapp_types::ResolveError`]; the errors
//! here only arise while configuring a resolver.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("registry catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("tracing init error: {0}")]
    Tracing(String),
}

/// Result type for resolver setup
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
