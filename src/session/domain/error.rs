//! Error types for session validation and state transitions.
//!
//! Display strings double as the user-facing notification copy, so
//! they carry product wording rather than log-style phrasing.

use thiserror::Error;

/// Errors returned by credential verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// A login credential field failed verification.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A required signup or profile field is missing.
    #[error("Please fill all required fields")]
    MissingFields,
}

/// Errors returned by session manager operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Credential verification failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The operation requires a signed-in user.
    #[error("No user is signed in")]
    NotAuthenticated,

    /// The new password and its confirmation differ.
    #[error("New passwords don't match")]
    PasswordMismatch,
}
