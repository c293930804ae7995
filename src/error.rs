//! error types for the session store.

use thiserror::Error;

/// Failures surfaced by login and signup. Callers display the message
/// and let the user resubmit; nothing is retried.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already in use")]
    EmailInUse,

    #[error("failed to persist session: {0}")]
    Storage(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AuthError>;
