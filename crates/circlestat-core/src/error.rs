//! Shared error type across circlestat crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// No route for the request.
    NotFound,
    /// Metrics could not be computed (source failure or internal error).
    MetricsFailed,
    /// The parent relation of the circle collection contains a cycle.
    CyclicInput,
    /// Two circles share the same id.
    DuplicateId,
    /// Startup configuration rejected.
    BadConfig,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::NotFound => "not_found",
            ClientCode::MetricsFailed => "metrics_failed",
            ClientCode::CyclicInput => "cyclic_input",
            ClientCode::DuplicateId => "duplicate_id",
            ClientCode::BadConfig => "bad_config",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CircleStatError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum CircleStatError {
    #[error("not found")]
    NotFound,
    #[error("cyclic input: {0}")]
    CyclicInput(String),
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("circle source: {0}")]
    Source(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl CircleStatError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CircleStatError::NotFound => ClientCode::NotFound,
            CircleStatError::CyclicInput(_) => ClientCode::CyclicInput,
            CircleStatError::DuplicateId(_) => ClientCode::DuplicateId,
            CircleStatError::BadConfig(_) => ClientCode::BadConfig,
            CircleStatError::Source(_) | CircleStatError::Internal(_) => ClientCode::MetricsFailed,
        }
    }
}
