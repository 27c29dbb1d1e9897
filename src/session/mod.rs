//! Session management for Corkboard.
//!
//! Owns the signed-in user and the login, signup, logout, and
//! profile-update transitions. Credential checking sits behind the
//! [`ports::CredentialVerifier`] seam so the bundled mock policy can be
//! swapped for a real backend without touching the session state
//! machine. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
