//! Domain-specific error types and error handling.

use thiserror::Error;

/// Failure talking to a remote collaborator (landing page or PIN service)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Request timed out")]
    Timeout,

    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Unexpected HTTP status: {status}")]
    Status { status: u16 },

    #[error("Invalid response body: {message}")]
    Decode { message: String },
}

/// Core domain errors
///
/// Remote failures never surface here: the resolver degrades to the default
/// configuration and the flow reports them as outcomes.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Client-held session data that this flow could not have produced
    #[error("Validation error: {message}")]
    Validation { field: &'static str, message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
