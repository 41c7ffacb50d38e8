//! Error taxonomy for the remote API boundary and the auth flows built on it.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` describes what went wrong on the wire. `AuthError` says which
//! auth step failed so callers can decide whether to surface or swallow it:
//! explicit sign-in surfaces everything, passive bootstrap swallows
//! `AuthResolution`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a single remote request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed with status {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request timed out")]
    Timeout,

    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the server answered with a non-2xx status.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Status(_))
    }
}

/// Failure of an auth session operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The credential exchange answered with a non-2xx status.
    #[error("credentials rejected (status {status})")]
    CredentialRejected { status: u16 },

    /// The credential exchange could not complete.
    #[error("credential exchange failed: {0}")]
    Exchange(ApiError),

    /// The token could not be turned into a user profile.
    #[error("could not resolve user profile: {0}")]
    AuthResolution(ApiError),

    #[error("registration failed: {0}")]
    Registration(ApiError),
}

impl AuthError {
    /// Classify an error from the credential exchange endpoint.
    pub fn from_exchange(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) => Self::CredentialRejected { status },
            other => Self::Exchange(other),
        }
    }
}
