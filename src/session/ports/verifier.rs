//! Credential verification port.

use crate::session::domain::{AuthError, Credentials, Registration, UserProfile};

/// Result type for credential verification.
pub type VerifierResult = Result<UserProfile, AuthError>;

/// Credential checking contract.
///
/// The bundled [`MockVerifier`](crate::session::adapters::MockVerifier)
/// implements a placeholder non-empty-field policy; a production
/// implementation must verify against a credential store and plugs in
/// here without changing the session state machine.
pub trait CredentialVerifier: Send + Sync {
    /// Verifies login credentials, yielding the account profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when verification
    /// rejects the credentials.
    fn verify_login(&self, credentials: &Credentials) -> VerifierResult;

    /// Verifies signup data, yielding the profile for the new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingFields`] when required data is
    /// absent.
    fn verify_signup(&self, registration: &Registration) -> VerifierResult;
}
