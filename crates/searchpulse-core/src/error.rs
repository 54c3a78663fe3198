//! Shared error type across searchpulse crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// No route matched.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Config could not be read.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SearchPulseError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum SearchPulseError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SearchPulseError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SearchPulseError::BadRequest(_) => ClientCode::BadRequest,
            SearchPulseError::NotFound => ClientCode::NotFound,
            SearchPulseError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SearchPulseError::Config(_) => ClientCode::Config,
            SearchPulseError::Internal(_) => ClientCode::Internal,
        }
    }
}
