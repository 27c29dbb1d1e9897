//! Port contracts for the session context.

mod verifier;

pub use verifier::{CredentialVerifier, VerifierResult};
