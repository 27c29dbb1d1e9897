//! Adapter implementations for the session context.

mod mock;

pub use mock::MockVerifier;
