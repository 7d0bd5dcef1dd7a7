//! Error taxonomy for HaloPSA operations
//!
//! Every failure is fail-fast: no retries, no partial recovery. Each kind
//! carries the HTTP status and body text when the server answered, or the
//! transport error description when it did not.

use thiserror::Error;

/// What went wrong on the wire for a single request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Failure {
    /// The server answered with a non-success status
    #[error("{status} - {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (connect, timeout, IO)
    #[error("{0}")]
    Transport(String),

    /// The server answered successfully but the body was not what we expected
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl Failure {
    /// Wrap a reqwest error raised before a usable response arrived
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Failure::InvalidResponse(err.to_string())
        } else {
            Failure::Transport(err.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Failure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum HaloError {
    /// Client-credentials exchange failed
    #[error("Authentication failed: {0}")]
    Authentication(Failure),

    /// Generic REST call failed
    #[error("API call failed: {0}")]
    ApiCall(Failure),

    /// Report query failed
    #[error("Query execution failed: {0}")]
    Query(Failure),

    /// The API description document could not be loaded or parsed
    #[error("Failed to load API description document: {0}")]
    SchemaFetch(String),

    /// The HTTP transport itself could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl HaloError {
    /// HTTP status of the failed request, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            HaloError::Authentication(f) | HaloError::ApiCall(f) | HaloError::Query(f) => f.status(),
            _ => None,
        }
    }

    /// Response body text of the failed request, when the server answered
    pub fn body(&self) -> Option<&str> {
        match self {
            HaloError::Authentication(Failure::Status { body, .. })
            | HaloError::ApiCall(Failure::Status { body, .. })
            | HaloError::Query(Failure::Status { body, .. }) => Some(body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HaloError>;
