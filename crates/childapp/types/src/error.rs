//! Resolution error types

use thiserror::Error;

/// Errors that terminate a child-app resolution.
///
/// None of these are retried. Callers surface them to users as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("invalid child app identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("child app not found: {0}")]
    NotFound(String),

    /// Registry misses and failed association checks both land here.
    #[error("unauthorized child app: {0}")]
    Unauthorized(String),

    #[error("app version not found: {0}")]
    VersionNotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

impl ResolveError {
    /// Stable, machine-readable kind for the error.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::InvalidIdentifier(_) => "invalid_identifier",
            ResolveError::NotFound(_) => "not_found",
            ResolveError::Unauthorized(_) => "unauthorized",
            ResolveError::VersionNotFound(_) => "version_not_found",
            ResolveError::Backend(_) => "backend",
        }
    }
}

/// Result type for resolution operations
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
