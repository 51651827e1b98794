//! Error Types
//!
//! Failures of remote calls and of the login handshake.

use thiserror::Error;

/// Failure of a call to the todo service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The service itself reported an error
    #[error("service rejected the call: {0}")]
    Rejected(String),
    /// The call never produced a service answer
    #[error("call failed: {0}")]
    Transport(String),
    /// The answer did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The page did not install the service bridge
    #[error("todo service bridge is not available")]
    Unavailable,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure of the identity provider handshake
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("login failed: {0}")]
    Handshake(String),
    #[error("identity provider is not available")]
    Unavailable,
}
