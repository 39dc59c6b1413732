//! Shared error type across promrelay crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed structured input (bad JSON, bad transport encoding).
    DecodeFailed,
    /// Well-formed but semantically invalid submission.
    ValidationFailed,
    /// Object-store collaborator failure (list/get/put).
    StoreFailed,
    /// Missing or invalid bearer token.
    AuthFailed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::DecodeFailed => "DECODE_FAILED",
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::StoreFailed => "STORE_FAILED",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Unified error type used by core and gateway.
///
/// Every variant is terminal for the current request: nothing is retried, and
/// no partial effect survives an error (ingest validates before storing;
/// aggregation returns no partial output).
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("store failed: {0}")]
    Store(String),
    #[error("auth failed")]
    AuthFailed,
    #[error("internal: {0}")]
    Internal(String),
}

impl MetricsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MetricsError::Decode(_) => ClientCode::DecodeFailed,
            MetricsError::Validation(_) => ClientCode::ValidationFailed,
            MetricsError::Store(_) => ClientCode::StoreFailed,
            MetricsError::AuthFailed => ClientCode::AuthFailed,
            MetricsError::Internal(_) => ClientCode::Internal,
        }
    }
}
