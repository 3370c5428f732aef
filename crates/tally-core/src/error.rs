//! Shared error type across tally crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Create on a name that is already taken.
    Conflict,
    /// Read or update of a name that was never created.
    NotFound,
    /// Invalid input / malformed config.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON error bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Conflict => "CONFLICT",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("counter already exists: {0}")]
    Conflict(String),
    #[error("counter not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::Conflict(_) => ClientCode::Conflict,
            TallyError::NotFound(_) => ClientCode::NotFound,
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }
}
