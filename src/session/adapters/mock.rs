//! Placeholder credential verifier.

use crate::session::domain::{AuthError, Credentials, Registration, UserProfile, is_blank};
use crate::session::ports::{CredentialVerifier, VerifierResult};

/// Demo verifier that accepts any non-empty credentials.
///
/// Login yields a fixed demo profile regardless of the submitted email;
/// signup echoes the submitted name and email. No credential store is
/// consulted and no uniqueness check is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVerifier;

impl MockVerifier {
    /// Display name assigned to every mock login.
    pub const DEMO_NAME: &'static str = "Demo User";

    /// Email assigned to every mock login.
    pub const DEMO_EMAIL: &'static str = "demo@example.com";

    /// Creates the demo verifier.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CredentialVerifier for MockVerifier {
    fn verify_login(&self, credentials: &Credentials) -> VerifierResult {
        if is_blank(&credentials.email) || is_blank(&credentials.password) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(UserProfile::new(Self::DEMO_NAME, Self::DEMO_EMAIL))
    }

    fn verify_signup(&self, registration: &Registration) -> VerifierResult {
        if is_blank(&registration.name)
            || is_blank(&registration.email)
            || is_blank(&registration.password)
        {
            return Err(AuthError::MissingFields);
        }
        Ok(UserProfile::new(
            registration.name.clone(),
            registration.email.clone(),
        ))
    }
}
