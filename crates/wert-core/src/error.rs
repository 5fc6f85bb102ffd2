//! # Session Error Types
//!
//! Typed error handling for the session proxy.
//! All session operations return `Result<T, SessionError>`.

use thiserror::Error;

/// Core error type for all session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// Configuration errors (missing keys, unreadable wallet file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Inbound body could not be parsed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider answered with a non-success status
    #[error("Provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Payload signature could not be computed
    #[error("Signing error: {0}")]
    Signing(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SessionError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            SessionError::Upstream { status, .. } => *status,
            SessionError::InvalidRequest(_) => 400,
            SessionError::Configuration(_)
            | SessionError::Network(_)
            | SessionError::Serialization(_)
            | SessionError::Signing(_)
            | SessionError::Internal(_) => 500,
        }
    }

    /// Returns true if the provider itself rejected the request
    pub fn is_upstream(&self) -> bool {
        matches!(self, SessionError::Upstream { .. })
    }
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        SessionError::Serialization(err.to_string())
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
