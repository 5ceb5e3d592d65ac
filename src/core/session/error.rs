//! Session error taxonomy
//!
//! Every failure the session layer can observe maps onto one of these
//! variants. The `Display` strings are what the UI shows to the user.

use super::backend::BackendError;
use super::codec::DecodeError;

/// Session layer errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Token could not be decoded into claims
    #[error("Invalid session data. Please login again.")]
    Decode(#[from] DecodeError),

    /// Token decoded fine but its `exp` is in the past
    #[error("Session expired. Please login again.")]
    ExpiredSession,

    /// Login response did not contain a usable token
    #[error("Invalid response from server")]
    Validation,

    /// Transport or HTTP failure while talking to the login endpoint
    #[error("{0}")]
    Network(String),

    /// Authenticated, but the role does not match the route
    #[error("Unauthorized Access")]
    Authorization,
}

impl From<BackendError> for SessionError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Body(_) => SessionError::Validation,
            other => SessionError::Network(other.user_message()),
        }
    }
}
