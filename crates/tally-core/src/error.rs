//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input (e.g. oversized counter name or bad config).
    BadRequest,
    /// Counter name is already registered.
    Conflict,
    /// Counter name is not registered.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
///
/// The `Display` text of the counter variants is what clients see in the
/// `Message` field of an error body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TallyError {
    #[error("Counter {0} already exists")]
    Conflict(String),
    #[error("Counter {0} not found")]
    NotFound(String),
    #[error("Counter {0} would overflow")]
    Overflow(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::Conflict(_) | TallyError::Overflow(_) => ClientCode::Conflict,
            TallyError::NotFound(_) => ClientCode::NotFound,
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }
}
